use std::fmt;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use game24_core::{FinalSolutions, Game24Error, Result, SubmissionRow, NO_SOLUTION};

/// Puzzles used when the benchmark dataset is not on disk.
pub const BUILTIN_PROBLEMS: &[&str] = &["1 1 4 6", "1 1 11 11", "1 1 3 8", "1 1 1 8", "6 6 6 6"];

const PROBLEM_COLUMN: &str = "Puzzles";
const SUBMISSION_HEADER: [&str; 3] = ["id", "problem", "solution"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalSource {
    Dataset(PathBuf),
    Builtin,
}

/// Ordered benchmark problems every submission must cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalProblems {
    pub problems: Vec<String>,
    pub source: CanonicalSource,
}

impl CanonicalProblems {
    pub fn builtin() -> Self {
        Self {
            problems: BUILTIN_PROBLEMS.iter().map(|p| p.to_string()).collect(),
            source: CanonicalSource::Builtin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReport {
    pub output: PathBuf,
    pub solved: usize,
    pub total: usize,
}

impl SubmissionReport {
    pub fn solved_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total as f64 * 100.0
    }
}

impl fmt::Display for SubmissionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Solutions found: {}/{} ({:.1}%)",
            self.solved,
            self.total,
            self.solved_percentage()
        )
    }
}

/// Reads the benchmark CSV, falling back to [`BUILTIN_PROBLEMS`] when it does not exist.
///
/// The problem column is `Puzzles` when the header has one, otherwise the second
/// column (or the only column).
pub fn load_canonical_problems(path: &Path) -> Result<CanonicalProblems> {
    if !path.exists() {
        tracing::warn!("Game24 dataset not found at {:?}, using built-in puzzles", path);
        return Ok(CanonicalProblems::builtin());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(Game24Error::Dataset(format!("{} has no columns", path.display())));
    }

    let column = match headers.iter().position(|h| h == PROBLEM_COLUMN) {
        Some(index) => index,
        None if headers.len() > 1 => 1,
        None => 0,
    };

    let mut problems = Vec::new();
    for record in reader.records() {
        let record = record?;
        problems.push(record.get(column).unwrap_or_default().trim().to_string());
    }

    tracing::info!("Loaded {} canonical problems from {:?}", problems.len(), path);

    Ok(CanonicalProblems {
        problems,
        source: CanonicalSource::Dataset(path.to_path_buf()),
    })
}

/// One row per canonical problem, in dataset order.
pub fn build_submission(
    solutions: &FinalSolutions,
    canonical: &CanonicalProblems,
) -> Vec<SubmissionRow> {
    canonical
        .problems
        .iter()
        .enumerate()
        .map(|(id, problem)| SubmissionRow {
            id,
            problem: problem.clone(),
            solution: solutions
                .get(problem)
                .cloned()
                .unwrap_or_else(|| NO_SOLUTION.to_string()),
        })
        .collect()
}

pub fn write_submission(path: &Path, rows: &[SubmissionRow]) -> Result<SubmissionReport> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Header is written by hand so an empty submission still carries it.
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(SUBMISSION_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} submission rows to {:?}", rows.len(), path);

    Ok(SubmissionReport {
        output: path.to_path_buf(),
        solved: rows.iter().filter(|r| r.is_solved()).count(),
        total: rows.len(),
    })
}
