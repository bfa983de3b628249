use std::fmt;
use std::path::Path;

use crate::checklist::{PathKind, SetupChecklist};
use crate::probe::PythonEnv;

pub const SMOKE_PROBLEM: &str = "1 1 4 6";
pub const SMOKE_ANSWER: &str = "(6 - 4) * (1 + 1)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub label: String,
    pub passed: bool,
    pub message: String,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.passed { '✓' } else { '✗' };
        write!(f, "{} {}", marker, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmokeTest {
    /// Not attempted because an earlier check failed.
    Skipped,
    Passed,
    /// The judge rejected the known-good answer.
    Rejected,
    Error(String),
}

impl SmokeTest {
    pub fn passed(&self) -> bool {
        matches!(self, SmokeTest::Passed)
    }
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub paths: Vec<CheckOutcome>,
    pub imports: Vec<CheckOutcome>,
    pub smoke: SmokeTest,
}

impl ValidationReport {
    pub fn paths_passed(&self) -> bool {
        self.paths.iter().all(|c| c.passed)
    }

    pub fn imports_passed(&self) -> bool {
        self.imports.iter().all(|c| c.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.paths_passed() && self.imports_passed() && self.smoke.passed()
    }

    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Runs every path and import check, then the judge smoke test if all of them passed.
pub async fn run_validation(
    root: &Path,
    checklist: &SetupChecklist,
    python: &dyn PythonEnv,
) -> ValidationReport {
    let paths: Vec<CheckOutcome> = checklist
        .paths
        .iter()
        .map(|check| {
            let passed = check.is_present(root);
            let shown = check.path.display();
            let message = if passed {
                format!("{}: {}", check.label, shown)
            } else {
                format!("{}: {} (NOT FOUND)", check.label, shown)
            };
            if !passed {
                let kind = match check.kind {
                    PathKind::Directory => "directory",
                    PathKind::File => "file",
                };
                tracing::warn!("Missing {}: {:?}", kind, root.join(&check.path));
            }
            CheckOutcome {
                label: check.label.clone(),
                passed,
                message,
            }
        })
        .collect();

    let mut imports = Vec::with_capacity(checklist.imports.len());
    for check in &checklist.imports {
        let outcome = match (python.import(check).await, &check.symbol) {
            (Ok(_), Some(_)) => CheckOutcome {
                label: check.label.clone(),
                passed: true,
                message: format!("{} can be imported", check.label),
            },
            (Ok(version), None) => CheckOutcome {
                label: check.label.clone(),
                passed: true,
                message: format!(
                    "{}: {}",
                    check.label,
                    version.as_deref().unwrap_or("unknown version")
                ),
            },
            (Err(e), Some(_)) => CheckOutcome {
                label: check.label.clone(),
                passed: false,
                message: format!("Cannot import {}: {}", check.label, e),
            },
            (Err(e), None) => {
                tracing::debug!("Import of {} failed: {}", check.module, e);
                CheckOutcome {
                    label: check.label.clone(),
                    passed: false,
                    message: format!("{} not installed", check.label),
                }
            }
        };
        imports.push(outcome);
    }

    let checks_passed = paths.iter().chain(&imports).all(|c| c.passed);
    let smoke = if !checks_passed {
        SmokeTest::Skipped
    } else {
        match python.judge_correct(SMOKE_PROBLEM, SMOKE_ANSWER).await {
            Ok(true) => SmokeTest::Passed,
            Ok(false) => SmokeTest::Rejected,
            Err(e) => SmokeTest::Error(e.to_string()),
        }
    };

    ValidationReport {
        paths,
        imports,
        smoke,
    }
}
