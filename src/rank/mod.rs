//! Ranking
//!
//! Frequency sorting of a bucket and the priority merge that produces the
//! final word list.

pub mod combine;
pub mod sort;

use serde::{Deserialize, Serialize};

pub use combine::find_important;
pub use sort::{rank_entries, sort_by_frequency};

/// A word together with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

impl RankedWord {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl AsRef<str> for RankedWord {
    fn as_ref(&self) -> &str {
        &self.word
    }
}
