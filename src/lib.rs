//! Find the most important words in a plain-text document.
//!
//! Words are counted after whitespace splitting, then sorted into three
//! buckets ranked by frequency:
//!
//! 1. words that only ever appear in title case (likely names and titles),
//! 2. purely numeric tokens,
//! 3. everything else,
//!
//! with common English words removed from the first and last bucket. The
//! buckets are concatenated in that order and truncated.
//!
//! ```
//! let words = topic_words::best_words(
//!     ["The Quick fox jumps. The Quick fox runs. 42 42 Dog barks."],
//!     5,
//! );
//! assert_eq!(words, vec!["Quick", "Dog", "4", "fox", "jumps"]);
//! ```

pub mod classify;
pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod types;

pub use classify::{extract_numbers, find_capitalized};
pub use errors::{KeywordError, Result, GENERIC_MESSAGE};
pub use nlp::stopwords::filter_common_words;
pub use nlp::tokenizer::record_frequencies;
pub use pipeline::{best_words, Pipeline};
pub use rank::{find_important, sort_by_frequency};
pub use types::{KeywordConfig, StripRule, WordFrequencies};
