use thiserror::Error;

/// Errors that abort a generation run
#[derive(Debug, Error)]
pub enum GenError {
    #[error("Invalid value for {key}: {reason}")]
    Config { key: String, reason: String },
    #[error("Could not find an unused {field} after {attempts} attempts")]
    UniqueExhausted { field: &'static str, attempts: usize },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenError {
    pub fn config(key: &str, reason: impl Into<String>) -> Self {
        GenError::Config {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
