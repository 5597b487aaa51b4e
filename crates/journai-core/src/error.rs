//! Error types for JournAI

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Mood analysis error: {0}")]
    Analysis(String),

    /// The record store could not return journal records for an insight query
    #[error("Record retrieval failed: {0}")]
    Retrieval(#[source] Box<Error>),
}

impl Error {
    /// Wrap a record-store failure so callers can tell it apart from other errors
    pub fn retrieval(source: Error) -> Self {
        Error::Retrieval(Box::new(source))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
