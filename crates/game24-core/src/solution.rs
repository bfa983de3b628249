use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Written for every canonical problem no method produced an answer for.
pub const NO_SOLUTION: &str = "No solution found";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateSolution {
    pub problem: String,
    pub solution: String,
    pub method: String,
    pub confidence: f64,
}

/// Problem string to the single solution chosen for it.
pub type FinalSolutions = HashMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub id: usize,
    pub problem: String,
    pub solution: String,
}

impl SubmissionRow {
    pub fn is_solved(&self) -> bool {
        self.solution != NO_SOLUTION
    }
}
