//! Capitalization reconciliation
//!
//! A word that only ever appears in title case ("London", "Hamlet") is
//! likely a name or title and goes to its own bucket. A word that also
//! appears in lowercase was only capitalized at sentence starts, so its
//! title-case count is folded into the lowercase entry.
//!
//! ALL-CAPS and mixed-case words are not title case and stay where they are.
//! Words without any cased character (`""`, `"--"`, `"3rd"`) count as their
//! own lowercase form, so they fold into themselves and are dropped.

use crate::rank::{rank_entries, RankedWord};
use crate::types::WordFrequencies;

/// Result of reconciling capitalized forms
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Words that are not title case, with merged counts folded in
    pub remaining: WordFrequencies,
    /// Words seen only in title case
    pub capitalized: WordFrequencies,
    /// Title-case forms whose counts were added to their lowercase form,
    /// plus caseless words, which fold into themselves and are dropped
    pub merged: Vec<String>,
}

impl Reconciliation {
    /// Capitalized words, highest count first
    pub fn capitalized_ranked(&self) -> Vec<RankedWord> {
        rank_entries(&self.capitalized)
    }
}

/// Whether `word` equals its own capitalized form: a first character that
/// uppercasing leaves unchanged, followed by nothing that changes under
/// lowercasing. The empty string qualifies.
pub fn is_title_case(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    let rest = chars.as_str();

    first.to_uppercase().eq(std::iter::once(first))
        && rest.chars().flat_map(char::to_lowercase).eq(rest.chars())
}

/// Split title-case words out of `words`, merging those that also appear in
/// lowercase.
///
/// The input is read as a snapshot; the returned mappings are rebuilt from
/// scratch. Membership of the lowercase form is checked against the input,
/// so the result does not depend on iteration order.
pub fn reconcile_capitalization(words: &WordFrequencies) -> Reconciliation {
    let mut out = Reconciliation::default();
    let mut pending = Vec::new();

    for (word, stat) in words.iter() {
        if !is_title_case(word) {
            out.remaining.insert(word, *stat);
            continue;
        }

        let lower = word.to_lowercase();
        if lower == word {
            // Caseless: folds into itself and is dropped.
            out.merged.push(word.to_string());
        } else if words.contains(&lower) {
            pending.push((lower, stat.count));
            out.merged.push(word.to_string());
        } else {
            out.capitalized.insert(word, *stat);
        }
    }

    for (lower, count) in pending {
        if !out.remaining.add_count(&lower, count) {
            out.capitalized.add_count(&lower, count);
        }
    }
    out.merged.sort_unstable();

    tracing::debug!(
        capitalized = out.capitalized.len(),
        merged = out.merged.len(),
        remaining = out.remaining.len(),
        "reconciled capitalization"
    );
    out
}

/// Returns the remaining mapping and the capitalized words sorted by
/// frequency.
pub fn find_capitalized(words: &WordFrequencies) -> (WordFrequencies, Vec<String>) {
    let reconciled = reconcile_capitalization(words);
    let sorted = reconciled
        .capitalized_ranked()
        .into_iter()
        .map(|r| r.word)
        .collect();
    (reconciled.remaining, sorted)
}
