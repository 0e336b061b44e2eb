//! Decoding tweets from JSON.
//!
//! The expected shape is an array of objects:
//!
//! ```json
//! [
//!   {"id": 1, "author": "alyssa", "text": "hello @bbitdiddle", "timestamp": "2016-02-17T10:00:00Z"}
//! ]
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info, warn};

use super::tweet::Tweet;
use crate::error::TweetError;

/// Decodes a JSON array of tweets, keeping `null` elements as `None`.
///
/// Pair with [`crate::try_get_timespan`], which rejects the absent entries.
pub fn parse_tweets_nullable(json: &str) -> Result<Vec<Option<Tweet>>, TweetError> {
    let tweets: Vec<Option<Tweet>> = serde_json::from_str(json)?;
    debug!("Decoded {} tweet entries", tweets.len());
    Ok(tweets)
}

/// Decodes a JSON array of tweets.
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: Every tweet, in input order
/// - `Err(TweetError::InvalidInput)`: If an element is `null`
/// - `Err(TweetError::Json)`: If the JSON is malformed or a tweet is missing a field
pub fn parse_tweets(json: &str) -> Result<Vec<Tweet>, TweetError> {
    parse_tweets_nullable(json)?
        .into_iter()
        .enumerate()
        .map(|(index, tweet)| {
            tweet.ok_or_else(|| {
                warn!("Rejecting tweet list: element {} is null", index);
                TweetError::invalid_input(format!("tweet at index {} is null", index))
            })
        })
        .collect()
}

/// Reads and decodes a JSON file of tweets.
///
/// # Parameters
///
/// - `path`: Path to a file holding a JSON array of tweets
///
/// # Returns
///
/// - `Ok(Vec<Tweet>)`: The decoded tweets
/// - `Err(TweetError::Io)`: If the file cannot be read
/// - `Err(...)`: Any error from [`parse_tweets`]
pub fn load_tweets(path: impl AsRef<Path>) -> Result<Vec<Tweet>, TweetError> {
    let path = path.as_ref();
    info!("Loading tweets from {}", path.display());

    let contents = fs::read_to_string(path)?;
    let tweets = parse_tweets(&contents)?;

    info!("Loaded {} tweets from {}", tweets.len(), path.display());
    Ok(tweets)
}
