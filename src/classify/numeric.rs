//! Numeric token extraction

use crate::types::WordFrequencies;

/// Whether `word` is a non-empty run of ASCII decimal digits
pub fn is_number(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Split purely numeric words out of `words`.
///
/// Returns `(remaining, numbers)`. The two mappings are disjoint and
/// together hold every key of the input with its original statistics.
pub fn extract_numbers(words: &WordFrequencies) -> (WordFrequencies, WordFrequencies) {
    let mut remaining = WordFrequencies::new();
    let mut numbers = WordFrequencies::new();

    for (word, stat) in words.iter() {
        if is_number(word) {
            numbers.insert(word, *stat);
        } else {
            remaining.insert(word, *stat);
        }
    }

    tracing::debug!(numbers = numbers.len(), remaining = remaining.len(), "extracted numbers");
    (remaining, numbers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WordStat;

    #[test]
    fn test_is_number() {
        assert!(is_number("42"));
        assert!(is_number("0"));
        assert!(is_number("2015"));
        assert!(!is_number(""));
        assert!(!is_number("-3"));
        assert!(!is_number("3.14"));
        assert!(!is_number("4th"));
        assert!(!is_number("٣")); // non-ASCII digit
    }

    #[test]
    fn test_extract_numbers_partitions() {
        let words: WordFrequencies = [
            ("fox", WordStat::new(2, 0)),
            ("42", WordStat::new(2, 1)),
            ("1984", WordStat::new(1, 2)),
            ("Dog", WordStat::new(1, 3)),
        ]
        .into_iter()
        .collect();

        let (remaining, numbers) = extract_numbers(&words);

        assert_eq!(numbers.len(), 2);
        assert_eq!(numbers.get("42"), Some(&WordStat::new(2, 1)));
        assert_eq!(numbers.get("1984"), Some(&WordStat::new(1, 2)));
        assert_eq!(remaining.len(), 2);
        assert!(remaining.contains("fox"));
        assert!(remaining.contains("Dog"));
        assert!(!remaining.contains("42"));
    }

    #[test]
    fn test_extract_numbers_leaves_input_untouched() {
        let words: WordFrequencies = [("7", WordStat::new(1, 0))].into_iter().collect();
        let (_, numbers) = extract_numbers(&words);

        assert_eq!(numbers.len(), 1);
        assert!(words.contains("7"));
    }

    #[test]
    fn test_extract_numbers_empty() {
        let (remaining, numbers) = extract_numbers(&WordFrequencies::new());
        assert!(remaining.is_empty());
        assert!(numbers.is_empty());
    }
}
