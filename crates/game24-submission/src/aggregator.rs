use std::collections::HashMap;

use game24_core::{CandidateSolution, FinalSolutions};

/// Keeps the highest-confidence candidate per problem.
///
/// A later candidate replaces the held one only when strictly more confident,
/// so the earliest candidate wins exact ties.
pub fn aggregate_solutions(candidates: &[CandidateSolution]) -> FinalSolutions {
    let mut best: HashMap<&str, &CandidateSolution> = HashMap::new();

    for candidate in candidates {
        best.entry(candidate.problem.as_str())
            .and_modify(|held| {
                if candidate.confidence > held.confidence {
                    *held = candidate;
                }
            })
            .or_insert(candidate);
    }

    best.into_iter()
        .map(|(problem, chosen)| (problem.to_string(), chosen.solution.clone()))
        .collect()
}
