use crate::domain::plaid::PlaidApiError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Plaid API error: {0}")]
    Plaid(PlaidApiError),

    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Report still pending after {attempts} attempts")]
    PollTimeout { attempts: u32 },

    #[error("Operation exceeded the {0:?} request deadline")]
    Deadline(Duration),

    #[error("Row width {actual} does not match column count {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Missing data: {0}")]
    MissingData(&'static str),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl FetchError {
    /// The one upstream error that is not a failure by itself: the
    /// asynchronous report has not finished generating. Handled only by
    /// the poller; everything else aborts the operation immediately.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, FetchError::Plaid(e) if e.error_code == "PRODUCT_NOT_READY")
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
