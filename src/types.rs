//! Core data types
//!
//! The word frequency mapping shared by every pipeline stage, plus the
//! configuration that drives a run.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-word statistics recorded by the frequency counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordStat {
    /// Number of occurrences
    pub count: usize,
    /// Ordinal of the first occurrence in the input (used as the tie-break)
    pub first_seen: usize,
}

impl WordStat {
    pub fn new(count: usize, first_seen: usize) -> Self {
        Self { count, first_seen }
    }
}

/// Case-sensitive word → frequency mapping.
///
/// Each distinct surface form has exactly one entry. Stages never mutate a
/// mapping they are iterating; they read a snapshot and write a fresh
/// `WordFrequencies`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    entries: FxHashMap<String, WordStat>,
    /// Next ordinal handed out by [`WordFrequencies::record`]
    next_seen: usize,
}

impl WordFrequencies {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`, creating it at 1 if absent
    pub fn record(&mut self, word: &str) {
        if let Some(stat) = self.entries.get_mut(word) {
            stat.count += 1;
        } else {
            self.entries
                .insert(word.to_string(), WordStat::new(1, self.next_seen));
            self.next_seen += 1;
        }
    }

    /// Insert an entry as-is, replacing any previous one
    pub fn insert(&mut self, word: impl Into<String>, stat: WordStat) {
        self.next_seen = self.next_seen.max(stat.first_seen + 1);
        self.entries.insert(word.into(), stat);
    }

    /// Add `count` occurrences to an existing entry.
    ///
    /// Returns `false` if the word is not present.
    pub fn add_count(&mut self, word: &str, count: usize) -> bool {
        match self.entries.get_mut(word) {
            Some(stat) => {
                stat.count += count;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordStat> {
        self.entries.get(word)
    }

    /// Occurrence count for `word`, 0 if absent
    pub fn count(&self, word: &str) -> usize {
        self.entries.get(word).map_or(0, |s| s.count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn remove(&mut self, word: &str) -> Option<WordStat> {
        self.entries.remove(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.entries.values().map(|s| s.count).sum()
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordStat)> {
        self.entries.iter().map(|(w, s)| (w.as_str(), s))
    }

    /// Iterate over keys in arbitrary order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(S, WordStat)> for WordFrequencies {
    fn from_iter<I: IntoIterator<Item = (S, WordStat)>>(iter: I) -> Self {
        let mut map = WordFrequencies::new();
        for (word, stat) in iter {
            map.insert(word, stat);
        }
        map
    }
}

/// How the frequency counter trims the last character of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripRule {
    /// Strip one trailing character unless it is in `[a-z]`.
    ///
    /// Digits and uppercase letters are stripped too, so `42` counts as `4`
    /// and a lone `-` becomes the empty word.
    #[default]
    Literal,
    /// Strip one trailing character only if it is ASCII punctuation
    AsciiPunctuation,
}

/// Which ranked bucket a word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Capitalized,
    Numeric,
    Ordinary,
}

/// Configuration for a keyword extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Maximum number of words returned
    pub max_words: usize,
    /// Trailing-character rule used while counting
    pub strip_rule: StripRule,
    /// Drop stoplist words from the capitalized and ordinary buckets
    pub filter_common_words: bool,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            max_words: 5,
            strip_rule: StripRule::Literal,
            filter_common_words: true,
        }
    }
}

impl KeywordConfig {
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    pub fn with_strip_rule(mut self, strip_rule: StripRule) -> Self {
        self.strip_rule = strip_rule;
        self
    }

    pub fn with_filter_common_words(mut self, enabled: bool) -> Self {
        self.filter_common_words = enabled;
        self
    }
}
