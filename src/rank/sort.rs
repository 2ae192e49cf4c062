//! Frequency sort
//!
//! Orders the keys of a [`WordFrequencies`] by descending count. Equal
//! counts keep input order: the word seen first in the text comes first.

use std::cmp::Reverse;

use super::RankedWord;
use crate::types::WordFrequencies;

/// Rank every entry of `words`, highest count first
pub fn rank_entries(words: &WordFrequencies) -> Vec<RankedWord> {
    let mut entries: Vec<_> = words.iter().collect();
    entries.sort_by_key(|(_, stat)| (Reverse(stat.count), stat.first_seen));

    entries
        .into_iter()
        .map(|(word, stat)| RankedWord::new(word, stat.count))
        .collect()
}

/// The keys of `words` sorted from highest to lowest count
pub fn sort_by_frequency(words: &WordFrequencies) -> Vec<String> {
    rank_entries(words).into_iter().map(|r| r.word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordStat;

    fn sample() -> WordFrequencies {
        [
            ("jumps", WordStat::new(1, 1)),
            ("fox", WordStat::new(2, 0)),
            ("runs", WordStat::new(1, 2)),
            ("barks", WordStat::new(1, 3)),
            ("lazy", WordStat::new(3, 4)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_sort_descending() {
        assert_eq!(
            sort_by_frequency(&sample()),
            vec!["lazy", "fox", "jumps", "runs", "barks"]
        );
    }

    #[test]
    fn test_ties_follow_first_occurrence() {
        let words: WordFrequencies = [
            ("zebra", WordStat::new(2, 0)),
            ("apple", WordStat::new(2, 1)),
            ("mango", WordStat::new(2, 2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(sort_by_frequency(&words), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_rank_entries_carry_counts() {
        let ranked = rank_entries(&sample());

        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0], RankedWord::new("lazy", 3));
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_by_frequency(&WordFrequencies::new()).is_empty());
    }
}
