use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const DEFAULT_OUTPUT: &str = "kaggle_submission/game24_submission.csv";
pub const DEFAULT_DATASET: &str = "tsllm/envs/game24/24.csv";
pub const DEFAULT_PYTHON: &str = "python3";

/// Environment variable overriding the interpreter used by the validator.
pub const PYTHON_ENV_VAR: &str = "GAME24_PYTHON";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    pub results_dir: PathBuf,
    pub output: PathBuf,
    /// Canonical benchmark CSV; the built-in puzzles are used when absent.
    #[serde(default = "default_dataset")]
    pub dataset_path: PathBuf,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dataset_path: default_dataset(),
        }
    }
}

fn default_dataset() -> PathBuf {
    PathBuf::from(DEFAULT_DATASET)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Directory every checklist path is resolved against.
    pub root: PathBuf,
    pub python: String,
    pub probe_timeout_ms: u64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            python: DEFAULT_PYTHON.to_string(),
            probe_timeout_ms: 60_000,
        }
    }
}

impl ValidatorConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(python) = std::env::var(PYTHON_ENV_VAR) {
            if !python.trim().is_empty() {
                config.python = python.trim().to_string();
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_defaults() {
        let config = SubmissionConfig::default();
        assert_eq!(config.results_dir, PathBuf::from("results"));
        assert_eq!(
            config.output,
            PathBuf::from("kaggle_submission/game24_submission.csv")
        );
        assert_eq!(config.dataset_path, PathBuf::from("tsllm/envs/game24/24.csv"));
    }

    #[test]
    fn test_dataset_path_defaults_when_missing() {
        let config: SubmissionConfig =
            serde_json::from_str(r#"{"results_dir": "out", "output": "sub.csv"}"#).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("out"));
        assert_eq!(config.dataset_path, PathBuf::from(DEFAULT_DATASET));
    }

    #[test]
    fn test_validator_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.python, "python3");
        assert_eq!(config.probe_timeout_ms, 60_000);
    }
}
