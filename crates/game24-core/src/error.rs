use thiserror::Error;

#[derive(Error, Debug)]
pub enum Game24Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset error: {0}")]
    Dataset(String),
}

pub type Result<T> = std::result::Result<T, Game24Error>;
