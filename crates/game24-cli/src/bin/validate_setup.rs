use std::process::ExitCode;

use clap::Parser;
use game24_core::ValidatorConfig;
use game24_setup::{
    run_validation, PythonInterpreter, SetupChecklist, SmokeTest, ValidationReport,
    SMOKE_ANSWER, SMOKE_PROBLEM,
};

#[derive(Parser)]
#[command(name = "validate-setup")]
#[command(
    about = "Check that the Game24 models, scripts and Python environment are in place",
    long_about = None
)]
struct Cli {}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    game24_cli::init_tracing();
    Cli::parse();

    let config = ValidatorConfig::from_env();
    let checklist = SetupChecklist::game24();
    tracing::debug!(python = %config.python, "Validating setup in {:?}", config.root);
    let python = PythonInterpreter::from_config(&config);

    let report = run_validation(&config.root, &checklist, &python).await;
    print_report(&report);

    ExitCode::from(report.exit_code())
}

fn print_report(report: &ValidationReport) {
    println!("Game24 Evaluation Setup Validation");
    println!("{}", game24_cli::separator());

    for check in &report.paths {
        println!("{}", check);
    }

    println!();
    println!("Testing Python imports...");
    for check in &report.imports {
        println!("{}", check);
    }

    println!();
    println!("{}", game24_cli::separator());

    if report.smoke != SmokeTest::Skipped {
        println!("Game24 Environment Test:");
        println!("Problem: {}", SMOKE_PROBLEM);
        println!("Answer: {}", SMOKE_ANSWER);
    }

    match &report.smoke {
        SmokeTest::Passed => {
            println!("Correct: true");
            println!("✓ Game24 environment is working correctly!");
        }
        SmokeTest::Rejected => {
            println!("Correct: false");
            println!("✗ Game24 environment test failed");
        }
        SmokeTest::Error(e) => println!("✗ Error testing Game24 environment: {}", e),
        SmokeTest::Skipped => {}
    }

    println!();
    if report.all_passed() {
        println!("✓ All validation checks passed! You're ready to run evaluation.");
        println!();
        println!("Next steps:");
        println!("1. Run: ./evaluate_game24.sh");
        println!("2. After evaluation completes, run: format-kaggle-submission");
    } else if !report.paths_passed() {
        println!("✗ Some files are missing. Please run ./setup_game24_evaluation.sh first.");
    } else {
        println!("✗ Validation failed. Please fix the issues above.");
    }
}
