//! Configuration module for the tweetgraph scripts.
//!
//! This module reads analysis settings from environment variables. The
//! library functions themselves take everything as arguments and never
//! consult the environment.

use log::{debug, info};
use std::env;

use crate::error::TweetError;
use crate::twitter::MentionPolicy;

/// Environment variable selecting the mention policy (`lenient` or `strict`).
pub const MENTION_POLICY_VAR: &str = "TWEETGRAPH_MENTION_POLICY";
/// Environment variable holding how many influencers to report.
pub const TOP_N_VAR: &str = "TWEETGRAPH_TOP_N";

const DEFAULT_TOP_N: usize = 10;

/// Settings for a tweet analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Policy used when listing mentioned users
    pub mention_policy: MentionPolicy,
    /// Number of influencers to report
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            mention_policy: MentionPolicy::Lenient,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new `AnalysisConfig` from environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `TWEETGRAPH_MENTION_POLICY`: `lenient` (default) or `strict`, case-insensitive
    /// - `TWEETGRAPH_TOP_N`: Positive number of influencers to report (default 10)
    ///
    /// # Returns
    ///
    /// - `Ok(AnalysisConfig)`: With defaults for unset variables
    /// - `Err(TweetError::Config)`: If a variable is set to an unusable value
    pub fn from_env() -> Result<Self, TweetError> {
        info!("Loading analysis configuration from environment variables");

        let policy = env::var(MENTION_POLICY_VAR).ok();
        let top_n = env::var(TOP_N_VAR).ok();
        Self::from_values(policy.as_deref(), top_n.as_deref())
    }

    /// Builds the configuration from raw variable values; `None` means unset.
    pub(crate) fn from_values(
        mention_policy: Option<&str>,
        top_n: Option<&str>,
    ) -> Result<Self, TweetError> {
        let mention_policy = match mention_policy {
            Some(value) => parse_mention_policy(value)?,
            None => {
                info!(
                    "No {} found in environment variables, using lenient mentions",
                    MENTION_POLICY_VAR
                );
                MentionPolicy::Lenient
            }
        };

        let top_n = match top_n {
            Some(value) => parse_top_n(value)?,
            None => {
                info!(
                    "No {} found in environment variables, defaulting to {}",
                    TOP_N_VAR, DEFAULT_TOP_N
                );
                DEFAULT_TOP_N
            }
        };

        let config = AnalysisConfig {
            mention_policy,
            top_n,
        };
        debug!("Analysis configuration: {:?}", config);
        Ok(config)
    }
}

fn parse_mention_policy(value: &str) -> Result<MentionPolicy, TweetError> {
    match value.trim().to_lowercase().as_str() {
        "lenient" => Ok(MentionPolicy::Lenient),
        "strict" => Ok(MentionPolicy::Strict),
        other => Err(TweetError::Config(format!(
            "{} must be 'lenient' or 'strict', got '{}'",
            MENTION_POLICY_VAR, other
        ))),
    }
}

fn parse_top_n(value: &str) -> Result<usize, TweetError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TweetError::Config(format!(
            "{} must be a positive number, got '{}'",
            TOP_N_VAR, value
        ))),
    }
}
