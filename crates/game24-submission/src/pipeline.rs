use game24_core::{Result, SubmissionConfig};

use crate::aggregator::aggregate_solutions;
use crate::extractor::extract_problem_solutions;
use crate::loader::{load_evaluation_results, LoadedResults};
use crate::submission::{
    build_submission, load_canonical_problems, write_submission, CanonicalSource,
    SubmissionReport,
};

#[derive(Debug, Clone)]
pub enum FormatOutcome {
    /// No method produced a parsable result file; nothing was written.
    NoResults,
    Written(SubmissionSummary),
}

#[derive(Debug, Clone)]
pub struct SubmissionSummary {
    pub loaded: Vec<LoadedResults>,
    pub candidates: usize,
    pub unique_problems: usize,
    pub canonical_source: CanonicalSource,
    pub report: SubmissionReport,
}

/// Loads, extracts, aggregates and writes the submission described by `config`.
pub fn format_submission(config: &SubmissionConfig) -> Result<FormatOutcome> {
    tracing::info!("Loading evaluation results from {:?}", config.results_dir);
    let loaded = load_evaluation_results(&config.results_dir);

    if loaded.is_empty() {
        return Ok(FormatOutcome::NoResults);
    }

    let candidates = extract_problem_solutions(&loaded);
    tracing::info!("Found {} problem-solution pairs", candidates.len());

    let solutions = aggregate_solutions(&candidates);
    tracing::info!("Final solutions for {} unique problems", solutions.len());

    let canonical = load_canonical_problems(&config.dataset_path)?;
    let rows = build_submission(&solutions, &canonical);
    let report = write_submission(&config.output, &rows)?;

    Ok(FormatOutcome::Written(SubmissionSummary {
        loaded,
        candidates: candidates.len(),
        unique_problems: solutions.len(),
        canonical_source: canonical.source,
        report,
    }))
}
