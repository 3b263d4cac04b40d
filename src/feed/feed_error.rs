use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FeedError {
    Network(String),
    HttpStatus(u16, String),
    Api(String),
    Unwrap(String),
    JsonParse(String),
    RefreshInProgress,
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Network(msg) => write!(f, "Network error: {msg}"),
            FeedError::HttpStatus(code, msg) => write!(f, "Feed returned HTTP {code}: {msg}"),
            FeedError::Api(msg) => write!(f, "Sheet query error: {msg}"),
            FeedError::Unwrap(msg) => write!(f, "Unexpected feed body: {msg}"),
            FeedError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            FeedError::RefreshInProgress => write!(f, "A refresh is already in progress"),
        }
    }
}

impl Error for FeedError {}
