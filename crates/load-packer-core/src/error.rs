use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid container dimensions: {width}x{height} (both must be finite and > 0)")]
    InvalidContainer { width: f64, height: f64 },
    #[error(
        "Invalid item #{index} ({label:?}): {width}x{height} (both must be finite and > 0)"
    )]
    InvalidItem {
        index: usize,
        label: String,
        width: f64,
        height: f64,
    },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
