// errors.rs
use crate::feed::FeedError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, state locks, etc.) or downstream layers (feed, export).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    FeedError(String),
    XlsxError(String),
    ConfigError(String),
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::FeedError(_) => 502,
            ServerError::XlsxError(_) | ServerError::ConfigError(_) | ServerError::InternalError => {
                500
            }
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::FeedError(msg) => write!(f, "Feed Error: {msg}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::ConfigError(msg) => write!(f, "Configuration Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<FeedError> for ServerError {
    fn from(err: FeedError) -> Self {
        ServerError::FeedError(err.to_string())
    }
}
