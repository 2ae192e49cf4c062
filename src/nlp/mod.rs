//! Natural Language Processing components
//!
//! This module provides tokenization, frequency counting and common-word
//! filtering.

pub mod stopwords;
pub mod tokenizer;
