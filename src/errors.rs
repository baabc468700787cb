use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Ways the external rate source can be unavailable. Every variant is
/// recovered inside the loader by falling back to the built-in table, so
/// none of these ever reach the user.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Source responded with status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
