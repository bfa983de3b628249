use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Directory,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCheck {
    pub label: String,
    /// Relative to the validation root.
    pub path: PathBuf,
    pub kind: PathKind,
}

impl PathCheck {
    fn new(label: &str, path: &str, kind: PathKind) -> Self {
        Self {
            label: label.to_string(),
            path: PathBuf::from(path),
            kind,
        }
    }

    pub fn is_present(&self, root: &Path) -> bool {
        let path = root.join(&self.path);
        match self.kind {
            PathKind::Directory => path.is_dir(),
            PathKind::File => path.exists(),
        }
    }
}

/// A Python import to attempt, either `import module` or `from module import symbol`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportCheck {
    pub label: String,
    pub module: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

impl ImportCheck {
    fn module(label: &str, module: &str) -> Self {
        Self {
            label: label.to_string(),
            module: module.to_string(),
            symbol: None,
        }
    }

    fn symbol(label: &str, module: &str, symbol: &str) -> Self {
        Self {
            label: label.to_string(),
            module: module.to_string(),
            symbol: Some(symbol.to_string()),
        }
    }

    /// Python statement performing the import.
    pub fn statement(&self) -> String {
        match &self.symbol {
            Some(symbol) => format!("from {} import {}", self.module, symbol),
            None => format!("import {}", self.module),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupChecklist {
    pub paths: Vec<PathCheck>,
    pub imports: Vec<ImportCheck>,
}

impl SetupChecklist {
    /// Everything the Game24 evaluation scripts expect after setup.
    pub fn game24() -> Self {
        use PathKind::{Directory, File};

        let policy = "models/policy/llama2-7b-game24-policy-hf";
        let value = "models/value/llama2-7b-game24-value";
        let ct2 = "models/ct2_cache/llama2-7b-game24-policy-ct2";

        Self {
            paths: vec![
                PathCheck::new("Policy Model Directory", policy, Directory),
                PathCheck::new("Value Model Directory", value, Directory),
                PathCheck::new("CT2 Cache Directory", ct2, Directory),
                PathCheck::new("Policy Config", &format!("{policy}/config.json"), File),
                PathCheck::new("Value Config", &format!("{value}/config.json"), File),
                PathCheck::new("CT2 Config", &format!("{ct2}/config.json"), File),
                PathCheck::new("Setup Script", "setup_game24_evaluation.sh", File),
                PathCheck::new("Evaluation Script", "evaluate_game24.sh", File),
                PathCheck::new("Submission Formatter", "format_kaggle_submission.py", File),
                PathCheck::new("Game24 Test Dataset", "tsllm/envs/game24/24.csv", File),
                PathCheck::new("Game24 Environment", "tsllm/envs/game24/env.py", File),
            ],
            imports: vec![
                ImportCheck::module("PyTorch", "torch"),
                ImportCheck::module("CTranslate2", "ctranslate2"),
                ImportCheck::module("Transformers", "transformers"),
                ImportCheck::symbol("Game24 environment", "tsllm.envs.game24.env", "Game24Env"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_game24_checklist_shape() {
        let checklist = SetupChecklist::game24();
        let dirs = checklist
            .paths
            .iter()
            .filter(|c| c.kind == PathKind::Directory)
            .count();
        assert_eq!(dirs, 3);
        assert_eq!(checklist.paths.len(), 11);
        assert_eq!(checklist.imports.len(), 4);
    }

    #[test]
    fn test_import_statements() {
        let checklist = SetupChecklist::game24();
        assert_eq!(checklist.imports[0].statement(), "import torch");
        assert_eq!(
            checklist.imports[3].statement(),
            "from tsllm.envs.game24.env import Game24Env"
        );
    }

    #[test]
    fn test_directory_check_rejects_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("models"), "").unwrap();

        let as_dir = PathCheck::new("Models", "models", PathKind::Directory);
        let as_file = PathCheck::new("Models", "models", PathKind::File);
        assert!(!as_dir.is_present(dir.path()));
        assert!(as_file.is_present(dir.path()));
        assert!(!PathCheck::new("Missing", "nope", PathKind::File).is_present(dir.path()));
    }
}
