//! Staged keyword pipeline
//!
//! [`runner::Pipeline`] threads [`artifacts`] through the counting,
//! classification, ranking, filtering and combining stages, reporting to a
//! [`observer::PipelineObserver`] along the way.

pub mod artifacts;
pub mod observer;
pub mod runner;
pub mod traits;
pub mod validation;

pub use runner::{best_words, Pipeline};
