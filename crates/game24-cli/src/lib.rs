use std::path::Path;

use game24_core::Method;
use game24_submission::SubmissionSummary;
use tracing_subscriber::EnvFilter;

/// Loads `.env` and installs the fmt subscriber on stderr.
///
/// Progress text goes to stdout, so logging defaults to `warn`; `RUST_LOG`
/// overrides it.
pub fn init_tracing() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .init();
}

pub fn separator() -> String {
    "=".repeat(50)
}

fn loaded_line(method: &str, source: &Path) -> String {
    match Method::from_dir_name(method) {
        Some(m) => format!(
            "Loaded results from {} ({}): {}",
            method,
            m.label(),
            source.display()
        ),
        None => format!("Loaded results from {}: {}", method, source.display()),
    }
}

/// Progress lines printed after a submission was written.
///
/// The built-in dataset fallback is reported through `tracing`, not here.
pub fn summary_lines(summary: &SubmissionSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .loaded
        .iter()
        .map(|loaded| loaded_line(&loaded.method, &loaded.source))
        .collect();

    lines.push(format!("Found {} problem-solution pairs", summary.candidates));
    lines.push(format!(
        "Final solutions for {} unique problems",
        summary.unique_problems
    ));
    lines.push(format!(
        "Kaggle submission saved to: {}",
        summary.report.output.display()
    ));
    lines.push(summary.report.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use game24_submission::{CanonicalSource, LoadedResults, SubmissionReport};
    use std::path::PathBuf;

    fn summary(canonical_source: CanonicalSource) -> SubmissionSummary {
        SubmissionSummary {
            loaded: vec![LoadedResults {
                method: "cot_sc_results".to_string(),
                source: PathBuf::from("results/cot_sc_results/run.json"),
                payload: serde_json::Value::Array(Vec::new()),
            }],
            candidates: 4,
            unique_problems: 3,
            canonical_source,
            report: SubmissionReport {
                output: PathBuf::from("kaggle_submission/game24_submission.csv"),
                solved: 3,
                total: 5,
            },
        }
    }

    #[test]
    fn test_summary_lines() {
        let lines = summary_lines(&summary(CanonicalSource::Dataset(PathBuf::from("24.csv"))));
        assert_eq!(
            lines,
            [
                "Loaded results from cot_sc_results (CoT-SC): results/cot_sc_results/run.json",
                "Found 4 problem-solution pairs",
                "Final solutions for 3 unique problems",
                "Kaggle submission saved to: kaggle_submission/game24_submission.csv",
                "Solutions found: 3/5 (60.0%)",
            ]
        );
    }

    #[test]
    fn test_builtin_fallback_is_not_repeated_on_stdout() {
        let lines = summary_lines(&summary(CanonicalSource::Builtin));
        assert!(lines.iter().all(|l| !l.contains("not found")));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_unknown_method_has_no_label() {
        assert_eq!(
            loaded_line("beam_results", Path::new("r/b.json")),
            "Loaded results from beam_results: r/b.json"
        );
        assert_eq!(
            loaded_line("mcts_results", Path::new("r/a.json")),
            "Loaded results from mcts_results (MCTS): r/a.json"
        );
    }
}
