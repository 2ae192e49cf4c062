//! Word classification
//!
//! Partitions a frequency mapping into the numeric, capitalized and
//! ordinary buckets that the ranker merges.

pub mod capitalized;
pub mod numeric;

pub use capitalized::{find_capitalized, is_title_case, reconcile_capitalization, Reconciliation};
pub use numeric::{extract_numbers, is_number};
