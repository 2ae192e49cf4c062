//! Priority merge of the ranked buckets

/// Concatenate the buckets in priority order and keep the first
/// `max_length` words.
///
/// Capitalized words come first, then numbers, then ordinary words. A
/// shorter combined list is returned whole.
pub fn find_important<T: Clone>(
    words: &[T],
    capitalized: &[T],
    numbers: &[T],
    max_length: usize,
) -> Vec<T> {
    capitalized
        .iter()
        .chain(numbers)
        .chain(words)
        .take(max_length)
        .cloned()
        .collect()
}
