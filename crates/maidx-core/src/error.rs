use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error("Invalid difficulty constant: {0}")]
    InvalidDifficulty(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
