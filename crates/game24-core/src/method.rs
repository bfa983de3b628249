use serde::{Deserialize, Serialize};

/// Confidence assigned to candidates from a method outside the known set.
pub const UNKNOWN_METHOD_CONFIDENCE: f64 = 0.5;

/// Evaluation strategies whose outputs are merged into one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    /// Tree search over policy/value models.
    #[serde(rename = "mcts_results")]
    Mcts,
    /// Self-consistency sampling.
    #[serde(rename = "cot_sc_results")]
    CotSelfConsistency,
    /// Greedy chain-of-thought decoding.
    #[serde(rename = "cot_greedy_results")]
    CotGreedy,
}

impl Method {
    pub fn label(&self) -> &'static str {
        match self {
            Method::Mcts => "MCTS",
            Method::CotSelfConsistency => "CoT-SC",
            Method::CotGreedy => "CoT Greedy",
        }
    }

    /// Name of the results subdirectory this method writes into.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Method::Mcts => "mcts_results",
            Method::CotSelfConsistency => "cot_sc_results",
            Method::CotGreedy => "cot_greedy_results",
        }
    }

    pub fn default_confidence(&self) -> f64 {
        match self {
            Method::Mcts => 0.8,
            Method::CotSelfConsistency => 0.7,
            Method::CotGreedy => 0.6,
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Method> {
        Method::all().iter().copied().find(|m| m.dir_name() == name)
    }

    /// Scan order used by the result loader.
    pub fn all() -> &'static [Method] {
        &[Method::Mcts, Method::CotSelfConsistency, Method::CotGreedy]
    }
}

/// Default confidence for a method identified by its directory name.
pub fn default_confidence(method: &str) -> f64 {
    Method::from_dir_name(method)
        .map(|m| m.default_confidence())
        .unwrap_or(UNKNOWN_METHOD_CONFIDENCE)
}
