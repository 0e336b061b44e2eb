//! Tweet analysis module.
//!
//! This module contains the tweet and timespan value types, mention parsing,
//! timespan and mention extraction, follows-graph inference and the JSON loader.

mod extract;
mod loader;
mod parsing;
mod social;
mod timespan;
mod tweet;

// Re-export public API
pub use extract::{get_mentioned_users, get_mentioned_users_with, get_timespan, try_get_timespan};
pub use loader::{load_tweets, parse_tweets, parse_tweets_nullable};
pub use parsing::{is_valid_username, MentionPolicy};
pub use social::{
    all_users_by_follower_count, follower_counts, guess_follows_graph, influencers,
    ranked_influencers, FollowsGraph,
};
pub use timespan::Timespan;
pub use tweet::Tweet;

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use parsing::extract_mentions;
