use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConvoError {
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ConvoError {
    fn from(e: serde_json::Error) -> Self {
        ConvoError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for ConvoError {
    fn from(e: std::io::Error) -> Self {
        ConvoError::Io(e.to_string())
    }
}
