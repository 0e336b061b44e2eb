//! Extraction of timespans and mentioned users from a batch of tweets.

use std::collections::HashSet;

use log::debug;

use super::parsing::{extract_mentions, MentionPolicy};
use super::timespan::Timespan;
use super::tweet::Tweet;
use crate::error::TweetError;

/// Gets the time period spanned by tweets.
///
/// # Parameters
///
/// - `tweets`: Tweets in any order; not modified
///
/// # Returns
///
/// - `Some(Timespan)`: The smallest interval containing every tweet's timestamp
/// - `None`: If `tweets` is empty
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tweetgraph::{get_timespan, Tweet};
///
/// let d1 = Utc.with_ymd_and_hms(2016, 2, 17, 10, 0, 0).unwrap();
/// let d2 = Utc.with_ymd_and_hms(2016, 2, 17, 11, 0, 0).unwrap();
/// let tweets = vec![
///     Tweet::new(1, "alyssa", "is it reasonable to talk about rivest so much?", d1),
///     Tweet::new(2, "bbitdiddle", "rivest talk in 30 minutes #hype", d2),
/// ];
///
/// let timespan = get_timespan(&tweets).unwrap();
/// assert_eq!(timespan.start(), d1);
/// assert_eq!(timespan.end(), d2);
/// assert!(get_timespan(&[]).is_none());
/// ```
pub fn get_timespan(tweets: &[Tweet]) -> Option<Timespan> {
    let timespan = covering_timespan(tweets.iter())?;
    debug!("Timespan of {} tweets: {}", tweets.len(), timespan);
    Some(timespan)
}

/// Gets the time period spanned by tweets that may contain absent entries.
///
/// This is the form to use on sequences decoded from JSON arrays where an
/// element can be `null` (see [`crate::parse_tweets_nullable`]).
///
/// # Returns
///
/// - `Ok(Some(Timespan))`: The smallest interval containing every timestamp
/// - `Ok(None)`: If `tweets` is empty
/// - `Err(TweetError::InvalidInput)`: If any element is `None`
pub fn try_get_timespan(tweets: &[Option<Tweet>]) -> Result<Option<Timespan>, TweetError> {
    if let Some(index) = tweets.iter().position(Option::is_none) {
        return Err(TweetError::invalid_input(format!(
            "tweet at index {} is null",
            index
        )));
    }
    Ok(covering_timespan(tweets.iter().flatten()))
}

/// Single pass over the timestamps, seeding min and max from the first tweet.
fn covering_timespan<'a>(mut tweets: impl Iterator<Item = &'a Tweet>) -> Option<Timespan> {
    let first = tweets.next()?.timestamp();
    let (start, end) = tweets.fold((first, first), |(start, end), tweet| {
        let timestamp = tweet.timestamp();
        (start.min(timestamp), end.max(timestamp))
    });
    // start <= end holds by construction
    Timespan::new(start, end).ok()
}

/// Gets the usernames mentioned in a batch of tweets.
///
/// Any whitespace-delimited token that starts with `@` and has at least one
/// more character counts; the rest of the token is taken as-is
/// ([`MentionPolicy::Lenient`]). Use [`get_mentioned_users_with`] for the
/// strict variant.
///
/// # Returns
///
/// The distinct mentioned usernames, lowercased. Empty for no tweets or no mentions.
pub fn get_mentioned_users(tweets: &[Tweet]) -> HashSet<String> {
    get_mentioned_users_with(tweets, MentionPolicy::Lenient)
}

/// Gets the usernames mentioned in a batch of tweets under the given policy.
pub fn get_mentioned_users_with(tweets: &[Tweet], policy: MentionPolicy) -> HashSet<String> {
    let mut mentioned_users = HashSet::new();
    for tweet in tweets {
        mentioned_users.extend(extract_mentions(tweet.text(), policy));
    }

    debug!(
        "Found {} distinct mentioned users in {} tweets ({:?} policy)",
        mentioned_users.len(),
        tweets.len(),
        policy
    );
    mentioned_users
}
