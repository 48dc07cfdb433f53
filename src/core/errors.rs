use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KikimineError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus error: {0}")]
    Corpus(Box<csv::Error>),

    #[error("Audio error: {0}")]
    Audio(Box<symphonia::core::errors::Error>),

    #[error("HTTP error: {0}")]
    Http(Box<reqwest::Error>),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Cache encode error: {0}")]
    CacheEncode(#[from] bincode::error::EncodeError),

    #[error("Cache decode error: {0}")]
    CacheDecode(#[from] bincode::error::DecodeError),

    #[error("No decodable audio track in {}", .0.display())]
    NoAudioTrack(PathBuf),

    #[error("Clip {} reports a non-positive duration", .0.display())]
    NonPositiveDuration(PathBuf),

    #[error("No distractors generated for token {0:?}")]
    MissingDistractor(String),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("KikimineError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KikimineError {
    fn from(error: std::io::Error) -> Self {
        KikimineError::Io(Box::new(error))
    }
}

impl From<csv::Error> for KikimineError {
    fn from(error: csv::Error) -> Self {
        KikimineError::Corpus(Box::new(error))
    }
}

impl From<symphonia::core::errors::Error> for KikimineError {
    fn from(error: symphonia::core::errors::Error) -> Self {
        KikimineError::Audio(Box::new(error))
    }
}

impl From<reqwest::Error> for KikimineError {
    fn from(error: reqwest::Error) -> Self {
        KikimineError::Http(Box::new(error))
    }
}
