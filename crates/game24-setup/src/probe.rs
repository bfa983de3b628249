use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use game24_core::ValidatorConfig;
use thiserror::Error;
use tokio::process::Command;

use crate::checklist::ImportCheck;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to start {0}: {1}")]
    Spawn(String, std::io::Error),
    #[error("Timeout after {0}ms")]
    Timeout(u64),
    #[error("{0}")]
    Failed(String),
    #[error("Unexpected output: {0}")]
    UnexpectedOutput(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// The Python side of the evaluation stack, as seen by the validator.
#[async_trait]
pub trait PythonEnv: Send + Sync {
    /// Performs the import, returning the module's `__version__` when it has one.
    async fn import(&self, check: &ImportCheck) -> Result<Option<String>>;

    /// Calls the environment's `judge_correct(problem, None, answer)`.
    async fn judge_correct(&self, problem: &str, answer: &str) -> Result<bool>;
}

/// Runs probes through a Python interpreter subprocess.
pub struct PythonInterpreter {
    program: String,
    working_dir: PathBuf,
    timeout_ms: u64,
}

impl PythonInterpreter {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>, timeout_ms: u64) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
            timeout_ms,
        }
    }

    /// Interpreter from `config.python`, run inside `config.root`.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(&config.python, &config.root, config.probe_timeout_ms)
    }

    async fn run_script(&self, script: &str, args: &[&str]) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-c")
            .arg(script)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .current_dir(&self.working_dir);

        let child = cmd
            .spawn()
            .map_err(|e| ProbeError::Spawn(self.program.clone(), e))?;

        let timeout = Duration::from_millis(self.timeout_ms);
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => return Err(ProbeError::Failed(e.to_string())),
            Err(_) => return Err(ProbeError::Timeout(self.timeout_ms)),
        };

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(ProbeError::Failed(last_error_line(&String::from_utf8_lossy(
                &output.stderr,
            ))))
        }
    }
}

#[async_trait]
impl PythonEnv for PythonInterpreter {
    async fn import(&self, check: &ImportCheck) -> Result<Option<String>> {
        let script = match &check.symbol {
            Some(_) => check.statement(),
            None => format!(
                "import {} as _m\nprint(getattr(_m, '__version__', ''))",
                check.module
            ),
        };

        tracing::debug!("Probing import: {}", check.statement());
        let stdout = self.run_script(&script, &[]).await?;
        Ok(Some(stdout).filter(|v| !v.is_empty()))
    }

    async fn judge_correct(&self, problem: &str, answer: &str) -> Result<bool> {
        let script = "import sys\n\
                      from tsllm.envs.game24.env import judge_correct\n\
                      print(bool(judge_correct(sys.argv[1], None, sys.argv[2])))";

        let stdout = self.run_script(script, &[problem, answer]).await?;
        match stdout.lines().last().unwrap_or_default() {
            "True" => Ok(true),
            "False" => Ok(false),
            other => Err(ProbeError::UnexpectedOutput(other.to_string())),
        }
    }
}

/// Python tracebacks end with the exception line, which is the useful part.
fn last_error_line(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("process exited with an error")
        .to_string()
}
