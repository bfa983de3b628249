use std::path::{Path, PathBuf};

use game24_core::{Method, Result};
use serde_json::Value;

/// Raw payload harvested from one method's results directory.
#[derive(Debug, Clone)]
pub struct LoadedResults {
    pub method: String,
    pub source: PathBuf,
    pub payload: Value,
}

/// Loads the first parsable result file of every known method under `results_dir`.
///
/// Single-document `.json` files are tried first, then `.jsonl` files. Candidates
/// are tried in lexicographic file-name order. Missing directories and files that
/// fail to read or parse are skipped.
pub fn load_evaluation_results(results_dir: &Path) -> Vec<LoadedResults> {
    let mut results = Vec::new();

    for method in Method::all() {
        let method_dir = results_dir.join(method.dir_name());
        if !method_dir.is_dir() {
            tracing::debug!("No results directory for {}: {:?}", method.dir_name(), method_dir);
            continue;
        }

        let loaded = first_parsable(&method_dir, "json", load_json)
            .or_else(|| first_parsable(&method_dir, "jsonl", load_jsonl));

        match loaded {
            Some((source, payload)) => {
                tracing::info!("Loaded results from {}: {:?}", method.dir_name(), source);
                results.push(LoadedResults {
                    method: method.dir_name().to_string(),
                    source,
                    payload,
                });
            }
            None => tracing::debug!("No parsable result file for {}", method.dir_name()),
        }
    }

    results
}

fn first_parsable(
    dir: &Path,
    extension: &str,
    parse: fn(&Path) -> Result<Value>,
) -> Option<(PathBuf, Value)> {
    list_files_with_extension(dir, extension)
        .into_iter()
        .find_map(|path| match parse(&path) {
            Ok(payload) => Some((path, payload)),
            Err(e) => {
                tracing::debug!("Skipping {:?}: {}", path, e);
                None
            }
        })
}

fn list_files_with_extension(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == extension))
        .collect();
    paths.sort();
    paths
}

fn load_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Every line must parse; one bad line rejects the whole file.
fn load_jsonl(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    let records = content
        .lines()
        .map(|line| serde_json::from_str(line.trim()))
        .collect::<std::result::Result<Vec<Value>, _>>()?;
    Ok(Value::Array(records))
}
