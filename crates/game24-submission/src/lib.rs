pub mod aggregator;
pub mod extractor;
pub mod loader;
pub mod pipeline;
pub mod submission;

pub use aggregator::aggregate_solutions;
pub use extractor::{extract_best_solution, extract_problem_solutions, solution_confidence};
pub use loader::{load_evaluation_results, LoadedResults};
pub use pipeline::{format_submission, FormatOutcome, SubmissionSummary};
pub use submission::{
    build_submission, load_canonical_problems, write_submission, CanonicalProblems,
    CanonicalSource, SubmissionReport, BUILTIN_PROBLEMS,
};
