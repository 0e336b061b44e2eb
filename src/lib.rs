//! # Tweetgraph Library
//!
//! A Rust library that extracts structured information from a batch of tweets
//! and infers who follows whom from the `@mentions` in them.
//!
//! ## Features
//!
//! - Timespan covering a batch of tweets
//! - Mentioned-user extraction with lenient or strict username rules
//! - Follows-graph inference (each mention is evidence the author follows that user)
//! - Influencer ranking by inferred follower count
//! - JSON tweet loading
//! - Structured logging through the `log` facade
//!
//! ## Configuration
//!
//! The library reads no configuration. The `analyze_tweets` script reads:
//! - `TWEETGRAPH_MENTION_POLICY`: `lenient` (default) or `strict`
//! - `TWEETGRAPH_TOP_N`: Number of influencers to print (defaults to 10)
//! - `RUST_LOG`: Log level filter

pub mod config;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::AnalysisConfig;
pub use error::TweetError;
pub use twitter::{
    all_users_by_follower_count, follower_counts, get_mentioned_users, get_mentioned_users_with,
    get_timespan, guess_follows_graph, influencers, is_valid_username, load_tweets, parse_tweets,
    parse_tweets_nullable, ranked_influencers, try_get_timespan, FollowsGraph, MentionPolicy,
    Timespan, Tweet,
};
