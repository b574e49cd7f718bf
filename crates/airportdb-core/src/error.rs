// crates/airportdb-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading or fetching airport data.
///
/// Index building and filtering never fail; only the I/O edge of the crate
/// (files, gzip streams, HTTP) reports errors through this type.
#[derive(Debug, Error)]
pub enum AirportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "fetch")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, AirportError>;
