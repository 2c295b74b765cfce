// src/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Video not found")]
    VideoNotFound,

    #[error("Category not found")]
    CategoryNotFound,

    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Other error: {0}")]
    Other(String),
}
