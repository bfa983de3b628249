use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use game24_core::config::{DEFAULT_OUTPUT, DEFAULT_RESULTS_DIR};
use game24_core::SubmissionConfig;
use game24_submission::{format_submission, FormatOutcome};

#[derive(Parser)]
#[command(name = "format-kaggle-submission")]
#[command(about = "Format Game24 evaluation results for Kaggle submission", long_about = None)]
struct Cli {
    /// Directory containing evaluation results
    #[arg(long = "results_dir", default_value = DEFAULT_RESULTS_DIR)]
    results_dir: PathBuf,

    /// Output file for Kaggle submission
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    game24_cli::init_tracing();

    let cli = Cli::parse();
    let config = SubmissionConfig {
        results_dir: cli.results_dir,
        output: cli.output,
        ..Default::default()
    };
    tracing::debug!(?config, "Formatting submission");

    println!("Loading evaluation results...");

    let summary = match format_submission(&config)? {
        FormatOutcome::NoResults => {
            println!("No evaluation results found. Please run the evaluation first.");
            return Ok(());
        }
        FormatOutcome::Written(summary) => summary,
    };

    for line in game24_cli::summary_lines(&summary) {
        println!("{}", line);
    }
    println!("Done!");

    Ok(())
}
