use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("URL template must contain exactly one '{{id}}' marker (found {0})")]
    MarkerCount(usize),

    #[error("Invalid ID range: '{0}'. Expected '<start>-<end>' (e.g. 1-100)")]
    InvalidRange(String),

    #[error("Invalid ID range: start {start} is greater than end {end}")]
    RangeOrder { start: i64, end: i64 },

    #[error("Unsupported method: '{0}'. Supported: GET, POST")]
    UnsupportedMethod(String),

    #[error("Invalid header: '{0}'. Expected 'Name: Value'")]
    InvalidHeader(String),
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}
