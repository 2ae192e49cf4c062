//! Common-word filtering
//!
//! The built-in list holds the 50 most common written English words plus
//! "is", "am" and "has". It is built once per process and never changes;
//! custom filters can be assembled with [`StopwordFilter::from_list`].

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// The built-in common-word list (lowercase)
pub const COMMON_WORDS: [&str; 53] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say",
    "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me", "is", "am", "has",
];

static COMMON: LazyLock<StopwordFilter> = LazyLock::new(StopwordFilter::new);

/// The process-wide filter over [`COMMON_WORDS`]
pub fn common_words() -> &'static StopwordFilter {
    &COMMON
}

/// Keep only words whose lowercase form is not a common word.
///
/// Order is preserved, and filtering twice gives the same list as filtering
/// once.
pub fn filter_common_words<T: AsRef<str> + Clone>(words: &[T]) -> Vec<T> {
    common_words().filter(words)
}

/// A case-insensitive set of words to drop from ranked lists
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercase stopwords
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    /// Create a filter over the built-in common-word list
    pub fn new() -> Self {
        Self::from_list(&COMMON_WORDS)
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Whether the lowercase form of `word` is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Return the words that are not stopwords, in their original order
    pub fn filter<T: AsRef<str> + Clone>(&self, words: &[T]) -> Vec<T> {
        words
            .iter()
            .filter(|w| !self.is_stopword(w.as_ref()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_word_list() {
        let filter = common_words();

        assert_eq!(COMMON_WORDS.iter().collect::<FxHashSet<_>>().len(), 53);
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("THE"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("am"));
        assert!(filter.is_stopword("has"));
        assert!(!filter.is_stopword("fox"));
        assert!(!filter.is_stopword("quick"));
        assert!(!filter.is_stopword(""));
    }

    #[test]
    fn test_filter_preserves_order() {
        let words = ["The", "Quick", "and", "Dog", "I", "fox"];
        assert_eq!(filter_common_words(&words), vec!["Quick", "Dog", "fox"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let words: Vec<String> = ["to", "be", "or", "not", "Hamlet", "question", "That"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let once = filter_common_words(&words);
        let twice = filter_common_words(&once);

        assert_eq!(once, vec!["Hamlet".to_string(), "question".to_string()]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_empty_list() {
        let words: Vec<&str> = Vec::new();
        assert!(filter_common_words(&words).is_empty());
    }

    #[test]
    fn test_custom_list_replaces_common_words() {
        let filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("WORDS"));
        assert!(!filter.is_stopword("the"));
        assert_eq!(filter.filter(&["the", "Custom", "words", "fox"]), vec!["the", "fox"]);
    }
}
