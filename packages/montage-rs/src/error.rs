use thiserror::Error;

#[derive(Error, Debug)]
pub enum MontageError {
    #[error("Cannot parse contact index from channel label: {label:?}")]
    NumericParse { label: String },

    #[error("Invalid reference tables: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MontageError {
    pub fn numeric_parse(label: impl Into<String>) -> Self {
        Self::NumericParse {
            label: label.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MontageError>;
