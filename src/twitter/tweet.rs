//! The tweet record the extraction functions read from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable tweet: id, author username, text and creation time.
///
/// Ids are expected to be unique within a batch, but nothing here checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tweet {
    id: u64,
    author: String,
    text: String,
    timestamp: DateTime<Utc>,
}

impl Tweet {
    /// Creates a tweet.
    ///
    /// # Parameters
    ///
    /// - `id`: Tweet id, unique within the batch it belongs to
    /// - `author`: Username of the author (case is preserved; consumers lowercase it)
    /// - `text`: Tweet text, possibly empty
    /// - `timestamp`: When the tweet was posted
    pub fn new(
        id: u64,
        author: impl Into<String>,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Tweet {
            id,
            author: author.into(),
            text: text.into(),
            timestamp,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
