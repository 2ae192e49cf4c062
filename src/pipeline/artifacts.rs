//! Pipeline artifacts.
//!
//! Typed intermediate results flowing between stages, and the formatted
//! result handed back to callers. [`KeywordResult`] is the public contract
//! rendered by the command-line tool (plain lines or JSON).

use serde::{Deserialize, Serialize};

use crate::rank::RankedWord;
use crate::types::Bucket;

/// The three ranked buckets after common-word filtering.
///
/// Each list is ordered by descending count. Numbers are never filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    pub capitalized: Vec<RankedWord>,
    pub numbers: Vec<RankedWord>,
    pub words: Vec<RankedWord>,
}

impl Buckets {
    /// Total number of candidate words across all buckets
    pub fn len(&self) -> usize {
        self.capitalized.len() + self.numbers.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which bucket `word` was ranked in, if any
    pub fn bucket_of(&self, word: &str) -> Option<Bucket> {
        let has = |list: &[RankedWord]| list.iter().any(|r| r.word == word);
        if has(&self.capitalized) {
            Some(Bucket::Capitalized)
        } else if has(&self.numbers) {
            Some(Bucket::Numeric)
        } else if has(&self.words) {
            Some(Bucket::Ordinary)
        } else {
            None
        }
    }
}

/// One selected word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub word: String,
    pub count: usize,
    pub bucket: Bucket,
}

/// Final output of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// Selected words, most important first
    pub keywords: Vec<Keyword>,
    /// Number of tokens read
    pub total_tokens: usize,
    /// Number of distinct tokens read
    pub distinct_tokens: usize,
}

impl KeywordResult {
    /// The selected words, in order
    pub fn words(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.word.as_str()).collect()
    }

    pub fn into_words(self) -> Vec<String> {
        self.keywords.into_iter().map(|k| k.word).collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets() -> Buckets {
        Buckets {
            capitalized: vec![RankedWord::new("Quick", 2)],
            numbers: vec![RankedWord::new("42", 2)],
            words: vec![RankedWord::new("fox", 2), RankedWord::new("runs", 1)],
        }
    }

    #[test]
    fn test_bucket_of() {
        let b = buckets();
        assert_eq!(b.len(), 4);
        assert_eq!(b.bucket_of("Quick"), Some(Bucket::Capitalized));
        assert_eq!(b.bucket_of("42"), Some(Bucket::Numeric));
        assert_eq!(b.bucket_of("runs"), Some(Bucket::Ordinary));
        assert_eq!(b.bucket_of("the"), None);
    }

    #[test]
    fn test_result_json_shape() {
        let result = KeywordResult {
            keywords: vec![Keyword {
                word: "Quick".into(),
                count: 2,
                bucket: Bucket::Capitalized,
            }],
            total_tokens: 14,
            distinct_tokens: 8,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["keywords"][0]["word"], "Quick");
        assert_eq!(json["keywords"][0]["bucket"], "capitalized");
        assert_eq!(json["total_tokens"], 14);

        let back: KeywordResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.words(), vec!["Quick"]);
    }
}
