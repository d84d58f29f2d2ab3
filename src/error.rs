use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaleriaError {
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gallery endpoint returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GaleriaError>;
