use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodonError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Usage Table Error (row {row}): {message}")]
    Load { row: usize, message: String },

    #[error("Invalid Sequence: '{found}' at position {position} is not a nucleotide")]
    InvalidSequence { position: usize, found: char },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Precondition Failed: {0}")]
    Precondition(String),
}

impl CodonError {
    pub(crate) fn load(row: usize, message: impl Into<String>) -> Self {
        Self::Load {
            row,
            message: message.into(),
        }
    }
}

pub type CfResult<T> = Result<T, CodonError>;
