use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyRankError {
    #[error("Invalid input error: {0}")]
    InvalidInputError(String),

    #[error("Embedding unavailable error: {0}")]
    EmbeddingUnavailableError(String),

    #[error("Invalid configuration error: {0}")]
    InvalidConfigurationError(String),

    #[error("IO error: {0}")]
    IOError(String),
}

impl From<std::io::Error> for KeyRankError {
    fn from(error: std::io::Error) -> Self {
        KeyRankError::IOError(error.to_string())
    }
}

impl From<regex::Error> for KeyRankError {
    fn from(error: regex::Error) -> Self {
        KeyRankError::InvalidConfigurationError(error.to_string())
    }
}

impl From<serde_json::Error> for KeyRankError {
    fn from(error: serde_json::Error) -> Self {
        KeyRankError::InvalidConfigurationError(error.to_string())
    }
}
