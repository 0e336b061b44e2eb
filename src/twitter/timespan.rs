//! Inclusive time interval covering a set of tweets.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TweetError;

/// An immutable interval `[start, end]`, endpoints included.
///
/// Invariant: `start <= end`. Both the constructor and deserialization enforce it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimespan")]
pub struct Timespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawTimespan {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawTimespan> for Timespan {
    type Error = TweetError;

    fn try_from(raw: RawTimespan) -> Result<Self, Self::Error> {
        Timespan::new(raw.start, raw.end)
    }
}

impl Timespan {
    /// Creates a timespan.
    ///
    /// # Returns
    ///
    /// - `Ok(Timespan)`: If `start <= end`
    /// - `Err(TweetError::InvalidInput)`: If `start` is after `end`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TweetError> {
        if start > end {
            return Err(TweetError::invalid_input(format!(
                "timespan requires start <= end, got {} > {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }
        Ok(Timespan { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` if `timestamp` lies within the interval, endpoints included.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    /// Length of the interval. Zero when `start == end`.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}...{}]",
            self.start.to_rfc3339(),
            self.end.to_rfc3339()
        )
    }
}
