//! Tweet Analysis Utility
//!
//! This script loads a JSON array of tweets and prints the timespan they cover,
//! the users they mention, the inferred follows graph and the top influencers.
//!
//! Usage: `analyze_tweets <tweets.json>`
//!
//! Set `TWEETGRAPH_MENTION_POLICY`, `TWEETGRAPH_TOP_N` and `RUST_LOG` to adjust the run.

use log::error;

use tweetgraph::{
    get_mentioned_users_with, get_timespan, guess_follows_graph, load_tweets, ranked_influencers,
    AnalysisConfig, TweetError,
};

fn main() {
    env_logger::init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: analyze_tweets <tweets.json>");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&path) {
        error!("Tweet analysis failed: {}", e);
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<(), TweetError> {
    let config = AnalysisConfig::from_env()?;
    let tweets = load_tweets(path)?;

    println!("📊 Tweet Analysis");
    println!("=================");
    println!();
    println!("Tweets: {}", tweets.len());

    match get_timespan(&tweets) {
        Some(timespan) => println!("Timespan: {}", timespan),
        None => println!("Timespan: no tweets"),
    }
    println!();

    let mut mentioned: Vec<String> = get_mentioned_users_with(&tweets, config.mention_policy)
        .into_iter()
        .collect();
    mentioned.sort();
    println!(
        "Mentioned users ({:?}): {}",
        config.mention_policy,
        mentioned.len()
    );
    for username in &mentioned {
        println!("  @{}", username);
    }
    println!();

    let follows_graph = guess_follows_graph(&tweets);
    let mut users: Vec<&String> = follows_graph.keys().collect();
    users.sort();
    println!("Follows graph: {} users", users.len());
    for user in users {
        let mut follows: Vec<&String> = follows_graph[user].iter().collect();
        follows.sort();
        let follows: Vec<String> = follows.iter().map(|f| format!("@{}", f)).collect();
        println!("  @{} -> [{}]", user, follows.join(", "));
    }
    println!();

    println!("Top influencers:");
    for (rank, (username, followers)) in ranked_influencers(&follows_graph)
        .into_iter()
        .take(config.top_n)
        .enumerate()
    {
        println!("  {}. @{} ({} followers)", rank + 1, username, followers);
    }

    Ok(())
}
