//! Follows-graph inference and influencer ranking.
//!
//! A mention is treated as evidence that the tweet's author follows the
//! mentioned user. Every username in the graph is lowercased.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use log::debug;

use super::parsing::{extract_mentions, MentionPolicy};
use super::tweet::Tweet;

/// Maps each user to the set of users they are inferred to follow.
pub type FollowsGraph = HashMap<String, HashSet<String>>;

/// Guesses who might follow whom, from evidence found in tweets.
///
/// For every tweet, the lowercased author and every strictly-valid mention in
/// the text become nodes, and the author gets an edge to each mention.
/// Mentioned users are present as keys even if they never tweet. An author
/// mentioning themselves gets a self-edge.
///
/// # Parameters
///
/// - `tweets`: The evidence; not modified
///
/// # Returns
///
/// A freshly built [`FollowsGraph`].
pub fn guess_follows_graph(tweets: &[Tweet]) -> FollowsGraph {
    let mut follows_graph = FollowsGraph::new();

    for tweet in tweets {
        let author = tweet.author().to_lowercase();
        let mentions = extract_mentions(tweet.text(), MentionPolicy::Strict);

        for mention in &mentions {
            follows_graph.entry(mention.clone()).or_default();
        }
        follows_graph.entry(author).or_default().extend(mentions);
    }

    debug!(
        "Built follows graph with {} users and {} edges from {} tweets",
        follows_graph.len(),
        follows_graph.values().map(HashSet::len).sum::<usize>(),
        tweets.len()
    );
    follows_graph
}

/// Counts inbound edges for every user that is followed at least once.
///
/// Users with no followers are absent from the map rather than mapped to zero.
pub fn follower_counts(follows_graph: &FollowsGraph) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for followed in follows_graph.values().flatten() {
        *counts.entry(followed.clone()).or_insert(0) += 1;
    }
    counts
}

/// Finds the users with the greatest influence, in the sense that they have
/// the most followers.
///
/// Only users with at least one follower are listed. Ties are ordered by
/// ascending username.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use tweetgraph::{guess_follows_graph, influencers, Tweet};
///
/// let d3 = Utc.with_ymd_and_hms(2016, 2, 17, 12, 0, 0).unwrap();
/// let graph = guess_follows_graph(&[Tweet::new(3, "user3", "Great discussion @alyssa", d3)]);
///
/// assert_eq!(influencers(&graph), vec!["alyssa".to_string()]);
/// ```
pub fn influencers(follows_graph: &FollowsGraph) -> Vec<String> {
    ranked_influencers(follows_graph)
        .into_iter()
        .map(|(username, _)| username)
        .collect()
}

/// Same ranking as [`influencers`], with each user's follower count attached.
pub fn ranked_influencers(follows_graph: &FollowsGraph) -> Vec<(String, usize)> {
    let ranked = rank(follower_counts(follows_graph).into_iter().collect());
    debug!("Ranked {} influencers", ranked.len());
    ranked
}

/// Ranks every user in the graph by follower count, including users nobody
/// follows (count 0). Ties are ordered by ascending username.
pub fn all_users_by_follower_count(follows_graph: &FollowsGraph) -> Vec<(String, usize)> {
    let mut counts = follower_counts(follows_graph);
    for user in follows_graph.keys() {
        counts.entry(user.clone()).or_insert(0);
    }
    rank(counts.into_iter().collect())
}

fn rank(mut counts: Vec<(String, usize)>) -> Vec<(String, usize)> {
    counts.sort_by(|(a_user, a_count), (b_user, b_count)| {
        (Reverse(a_count), a_user).cmp(&(Reverse(b_count), b_user))
    });
    counts
}
