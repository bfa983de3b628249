use game24_core::{default_confidence, CandidateSolution, NO_SOLUTION};
use serde_json::{Map, Value};

use crate::loader::LoadedResults;

/// Solution fields, highest priority first.
const SOLUTION_KEYS: &[&str] = &["answer", "prediction", "output", "best_answer", "solution"];

/// Confidence fields, highest priority first.
const CONFIDENCE_KEYS: &[&str] = &["confidence", "score", "value", "probability"];

/// Pulls one candidate out of every record that carries a `question`.
pub fn extract_problem_solutions(results: &[LoadedResults]) -> Vec<CandidateSolution> {
    let mut candidates = Vec::new();

    for loaded in results {
        for record in records(&loaded.payload) {
            let Some(item) = record.as_object() else {
                continue;
            };
            let Some(question) = item.get("question").and_then(Value::as_str) else {
                continue;
            };

            candidates.push(CandidateSolution {
                problem: question.trim().to_string(),
                solution: extract_best_solution(item),
                method: loaded.method.clone(),
                confidence: solution_confidence(item, &loaded.method),
            });
        }
    }

    candidates
}

fn records(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

pub fn extract_best_solution(item: &Map<String, Value>) -> String {
    for key in SOLUTION_KEYS {
        match item.get(*key) {
            Some(Value::Array(values)) if !values.is_empty() => return render(&values[0]),
            Some(Value::String(s)) => return s.clone(),
            _ => {}
        }
    }

    if let Some(Value::Array(outputs)) = item.get("outputs") {
        if let Some(first) = outputs.first() {
            return render(first);
        }
    }

    NO_SOLUTION.to_string()
}

pub fn solution_confidence(item: &Map<String, Value>, method: &str) -> f64 {
    for key in CONFIDENCE_KEYS {
        let confidence = match item.get(*key) {
            Some(Value::Array(values)) => values.first().and_then(coerce_score),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => coerce_score(value),
            _ => None,
        };
        if let Some(confidence) = confidence {
            return confidence;
        }
    }

    default_confidence(method)
}

fn coerce_score(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn loaded(method: &str, payload: Value) -> LoadedResults {
        LoadedResults {
            method: method.to_string(),
            source: PathBuf::from("out.json"),
            payload,
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_answer_beats_prediction() {
        let item = object(json!({"answer": "X", "prediction": "Y"}));
        assert_eq!(extract_best_solution(&item), "X");
    }

    #[test]
    fn test_list_solution_takes_first_element() {
        let item = object(json!({"prediction": ["(1+2+3)*4", "4*6"]}));
        assert_eq!(extract_best_solution(&item), "(1+2+3)*4");
    }

    #[test]
    fn test_non_string_element_is_rendered_as_json() {
        let item = object(json!({"answer": [24]}));
        assert_eq!(extract_best_solution(&item), "24");
    }

    #[test]
    fn test_bool_null_and_object_elements_keep_json_spelling() {
        let item = object(json!({"answer": [true]}));
        assert_eq!(extract_best_solution(&item), "true");

        let item = object(json!({"prediction": [null, "6*4"]}));
        assert_eq!(extract_best_solution(&item), "null");

        let item = object(json!({"outputs": [{"a": 1}]}));
        assert_eq!(extract_best_solution(&item), r#"{"a":1}"#);
    }

    #[test]
    fn test_unusable_field_falls_through_to_next_key() {
        let item = object(json!({"answer": [], "prediction": 7, "output": "6*4"}));
        assert_eq!(extract_best_solution(&item), "6*4");
    }

    #[test]
    fn test_outputs_fallback_then_default() {
        let item = object(json!({"outputs": ["a", "b"]}));
        assert_eq!(extract_best_solution(&item), "a");

        let item = object(json!({"outputs": []}));
        assert_eq!(extract_best_solution(&item), NO_SOLUTION);

        let item = object(json!({"question": "1 1 4 6"}));
        assert_eq!(extract_best_solution(&item), NO_SOLUTION);
    }

    #[test]
    fn test_confidence_defaults_per_method() {
        let item = object(json!({"question": "1 1 4 6"}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 0.8);
        assert_eq!(solution_confidence(&item, "cot_sc_results"), 0.7);
        assert_eq!(solution_confidence(&item, "cot_greedy_results"), 0.6);
        assert_eq!(solution_confidence(&item, "other_results"), 0.5);
    }

    #[test]
    fn test_confidence_key_priority_and_shapes() {
        let item = object(json!({"score": 0.3, "confidence": 0.9}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 0.9);

        let item = object(json!({"value": [0.25, 0.9]}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 0.25);

        let item = object(json!({"probability": ["0.4"]}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 0.4);

        let item = object(json!({"confidence": 2}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 2.0);
    }

    #[test]
    fn test_unusable_confidence_falls_through() {
        let item = object(json!({"confidence": "high", "score": [], "value": 0.1}));
        assert_eq!(solution_confidence(&item, "mcts_results"), 0.1);

        let item = object(json!({"confidence": "0.9"}));
        assert_eq!(solution_confidence(&item, "cot_sc_results"), 0.7);
    }

    #[test]
    fn test_extracts_from_list_and_wrapped_payloads() {
        let results = vec![
            loaded(
                "mcts_results",
                json!({"results": [{"question": " 1 1 4 6 ", "answer": "(6-4)*(1+1)"}]}),
            ),
            loaded(
                "cot_sc_results",
                json!([{"question": "6 6 6 6", "prediction": ["6+6+6+6"], "score": 0.95}]),
            ),
        ];

        let candidates = extract_problem_solutions(&results);
        assert_eq!(
            candidates,
            vec![
                CandidateSolution {
                    problem: "1 1 4 6".to_string(),
                    solution: "(6-4)*(1+1)".to_string(),
                    method: "mcts_results".to_string(),
                    confidence: 0.8,
                },
                CandidateSolution {
                    problem: "6 6 6 6".to_string(),
                    solution: "6+6+6+6".to_string(),
                    method: "cot_sc_results".to_string(),
                    confidence: 0.95,
                },
            ]
        );
    }

    #[test]
    fn test_skips_records_without_question() {
        let results = vec![loaded(
            "cot_greedy_results",
            json!([
                {"answer": "1+2"},
                "1 1 4 6",
                {"question": 1146, "answer": "x"},
                {"question": "1 1 3 8", "answer": "(1+1)*3*8"}
            ]),
        )];

        let candidates = extract_problem_solutions(&results);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].problem, "1 1 3 8");
    }

    #[test]
    fn test_payload_without_record_list_yields_nothing() {
        let results = vec![
            loaded("mcts_results", json!({"accuracy": 0.4})),
            loaded("cot_sc_results", json!({"results": "none"})),
            loaded("cot_greedy_results", json!(42)),
        ];
        assert!(extract_problem_solutions(&results).is_empty());
    }
}
