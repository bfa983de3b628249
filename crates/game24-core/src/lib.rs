// Domain modules
pub mod config;
pub mod error;
pub mod method;
pub mod solution;

pub use config::{SubmissionConfig, ValidatorConfig};
pub use error::{Game24Error, Result};
pub use method::{default_confidence, Method, UNKNOWN_METHOD_CONFIDENCE};
pub use solution::{CandidateSolution, FinalSolutions, SubmissionRow, NO_SOLUTION};
