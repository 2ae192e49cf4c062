//! Stage trait definitions for the pipeline.
//!
//! The only pluggable stage is the common-word filter. Implementations are
//! statically dispatched; the zero-sized [`CommonWordFilter`] is the
//! default.

use crate::nlp::stopwords::{common_words, StopwordFilter};
use crate::rank::RankedWord;

/// Decides which ranked words survive the filter stage.
///
/// # Contract
///
/// - Order of the surviving words is preserved.
/// - **Idempotent**: filtering a filtered list returns it unchanged.
pub trait WordFilter {
    /// Whether `word` should be kept.
    fn keep(&self, word: &str) -> bool;

    /// Filter a ranked list.
    fn filter_ranked(&self, words: Vec<RankedWord>) -> Vec<RankedWord> {
        words.into_iter().filter(|r| self.keep(&r.word)).collect()
    }
}

/// Filter over the built-in common-word list.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonWordFilter;

impl WordFilter for CommonWordFilter {
    #[inline]
    fn keep(&self, word: &str) -> bool {
        !common_words().is_stopword(word)
    }
}

/// Filter that keeps every word.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFilter;

impl WordFilter for NoopFilter {
    #[inline]
    fn keep(&self, _word: &str) -> bool {
        true
    }
}

impl WordFilter for StopwordFilter {
    fn keep(&self, word: &str) -> bool {
        !self.is_stopword(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(words: &[&str]) -> Vec<RankedWord> {
        words.iter().map(|w| RankedWord::new(*w, 1)).collect()
    }

    #[test]
    fn test_common_filter_drops_stoplist() {
        let out = CommonWordFilter.filter_ranked(ranked(&["The", "Quick", "is", "Dog"]));
        let words: Vec<_> = out.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["Quick", "Dog"]);
    }

    #[test]
    fn test_common_filter_is_idempotent() {
        let once = CommonWordFilter.filter_ranked(ranked(&["a", "river", "of", "time"]));
        let twice = CommonWordFilter.filter_ranked(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_noop_filter_keeps_all() {
        let input = ranked(&["the", "and", "of"]);
        assert_eq!(NoopFilter.filter_ranked(input.clone()), input);
    }

    #[test]
    fn test_custom_stopword_filter_as_stage() {
        let filter = StopwordFilter::from_list(&["river"]);
        let out = filter.filter_ranked(ranked(&["the", "river", "Time"]));
        let words: Vec<_> = out.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["the", "Time"]);
    }

    #[test]
    fn test_filter_as_trait_object() {
        let filter: Box<dyn WordFilter> = Box::new(CommonWordFilter);
        assert!(!filter.keep("the"));
        assert!(filter.keep("river"));
    }
}
