//! Error types for the tweetgraph library.

use thiserror::Error;

/// Errors produced while loading tweets or building the values the core works with.
///
/// An empty tweet list is never an error: [`crate::get_timespan`] reports it as `None`.
#[derive(Debug, Error)]
pub enum TweetError {
    /// An element was missing where one was required, or a timespan was built
    /// with `start > end`.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("malformed tweet JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read tweets: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TweetError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        TweetError::InvalidInput(message.into())
    }
}
