//! Pipeline runner: orchestrates stage execution and artifact flow.
//!
//! Stages run in a fixed order:
//! 1. Count word frequencies
//! 2. Extract numbers
//! 3. Reconcile capitalization
//! 4. Rank every bucket by frequency
//! 5. Filter common words (capitalized and ordinary buckets only)
//! 6. Combine buckets by priority and truncate
//!
//! An optional [`PipelineObserver`] is notified at every stage boundary.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::classify::{extract_numbers, reconcile_capitalization};
use crate::errors::{KeywordError, Result};
use crate::nlp::tokenizer::{count_line, record_frequencies_from_reader};
use crate::pipeline::artifacts::{Buckets, Keyword, KeywordResult};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder,
    STAGE_CAPITALIZED, STAGE_COMBINE, STAGE_COUNT, STAGE_FILTER, STAGE_NUMBERS, STAGE_RANK,
};
use crate::pipeline::traits::{CommonWordFilter, WordFilter};
use crate::pipeline::validation::validate_config;
use crate::rank::{find_important, rank_entries, RankedWord};
use crate::types::{Bucket, KeywordConfig, WordFrequencies};

/// Enter a tracing span for a pipeline stage; it closes at the end of the
/// enclosing block.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

/// A keyword pipeline: a configuration plus the common-word filter stage.
#[derive(Debug, Clone)]
pub struct Pipeline<F = CommonWordFilter> {
    pub filter: F,
    pub config: KeywordConfig,
}

impl Pipeline {
    /// Pipeline with the default configuration (top 5 words).
    pub fn new() -> Self {
        Pipeline {
            filter: CommonWordFilter,
            config: KeywordConfig::default(),
        }
    }

    /// Pipeline for `config`, rejected if validation reports errors.
    pub fn from_config(config: KeywordConfig) -> Result<Self> {
        let report = validate_config(&config);
        for warning in report.warnings() {
            tracing::warn!(%warning, "questionable configuration");
        }
        if let Some(err) = report.errors().next() {
            return Err(KeywordError::InvalidConfig(err.to_string()));
        }

        Ok(Pipeline {
            filter: CommonWordFilter,
            config,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Pipeline<F> {
    /// Replace the common-word filter stage.
    pub fn with_filter<G: WordFilter>(self, filter: G) -> Pipeline<G> {
        Pipeline {
            filter,
            config: self.config,
        }
    }

    /// Change the number of words returned.
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.config.max_words = max_words;
        self
    }
}

impl<F: WordFilter> Pipeline<F> {
    /// Run over in-memory lines.
    pub fn run_lines<I, S>(&self, lines: I, observer: &mut impl PipelineObserver) -> KeywordResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = {
            trace_stage!(STAGE_COUNT);
            observer.on_stage_start(STAGE_COUNT);
            let clock = StageClock::start();
            let mut words = WordFrequencies::new();
            for line in lines {
                count_line(line.as_ref(), self.config.strip_rule, &mut words);
            }
            let report = StageReportBuilder::new(clock.elapsed())
                .words_out(words.len())
                .build();
            observer.on_stage_end(STAGE_COUNT, &report);
            words
        };

        self.rank(&words, observer)
    }

    /// Run over lines streamed from `reader`.
    pub fn run_reader<R: BufRead>(
        &self,
        reader: R,
        observer: &mut impl PipelineObserver,
    ) -> Result<KeywordResult> {
        let words = {
            trace_stage!(STAGE_COUNT);
            observer.on_stage_start(STAGE_COUNT);
            let clock = StageClock::start();
            let words = record_frequencies_from_reader(reader, self.config.strip_rule)?;
            let report = StageReportBuilder::new(clock.elapsed())
                .words_out(words.len())
                .build();
            observer.on_stage_end(STAGE_COUNT, &report);
            words
        };

        Ok(self.rank(&words, observer))
    }

    /// Run over the file at `path`.
    ///
    /// The file is closed when this returns, on success or error.
    pub fn run_path(
        &self,
        path: impl AsRef<Path>,
        observer: &mut impl PipelineObserver,
    ) -> Result<KeywordResult> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| KeywordError::io(path, e))?;
        if metadata.is_dir() {
            return Err(KeywordError::PathIsDirectory(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| KeywordError::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = metadata.len(), "opened input");

        self.run_reader(BufReader::new(file), observer)
            .map_err(|err| match err {
                KeywordError::Io { source, .. } => KeywordError::io(path, source),
                other => other,
            })
    }

    /// Run every stage after counting on an existing frequency mapping.
    pub fn rank(&self, words: &WordFrequencies, observer: &mut impl PipelineObserver) -> KeywordResult {
        observer.on_frequencies(words);

        // Stage 2: numbers
        let (remaining, numbers) = {
            trace_stage!(STAGE_NUMBERS);
            observer.on_stage_start(STAGE_NUMBERS);
            let clock = StageClock::start();
            let split = extract_numbers(words);
            let report = StageReportBuilder::new(clock.elapsed())
                .words_in(words.len())
                .words_out(split.0.len())
                .build();
            observer.on_stage_end(STAGE_NUMBERS, &report);
            split
        };

        // Stage 3: capitalization
        let reconciled = {
            trace_stage!(STAGE_CAPITALIZED);
            observer.on_stage_start(STAGE_CAPITALIZED);
            let clock = StageClock::start();
            let reconciled = reconcile_capitalization(&remaining);
            let report = StageReportBuilder::new(clock.elapsed())
                .words_in(remaining.len())
                .words_out(reconciled.remaining.len())
                .build();
            observer.on_stage_end(STAGE_CAPITALIZED, &report);
            reconciled
        };

        // Stage 4: rank
        let ranked = {
            trace_stage!(STAGE_RANK);
            observer.on_stage_start(STAGE_RANK);
            let clock = StageClock::start();
            let ranked = Buckets {
                capitalized: reconciled.capitalized_ranked(),
                numbers: rank_entries(&numbers),
                words: rank_entries(&reconciled.remaining),
            };
            observer.on_stage_end(STAGE_RANK, &StageReport::new(clock.elapsed()));
            ranked
        };

        // Stage 5: filter
        let buckets = {
            trace_stage!(STAGE_FILTER);
            observer.on_stage_start(STAGE_FILTER);
            let clock = StageClock::start();
            let words_in = ranked.len();
            let buckets = if self.config.filter_common_words {
                Buckets {
                    capitalized: self.filter.filter_ranked(ranked.capitalized),
                    numbers: ranked.numbers,
                    words: self.filter.filter_ranked(ranked.words),
                }
            } else {
                ranked
            };
            let report = StageReportBuilder::new(clock.elapsed())
                .words_in(words_in)
                .words_out(buckets.len())
                .build();
            observer.on_stage_end(STAGE_FILTER, &report);
            buckets
        };
        observer.on_buckets(&buckets);

        // Stage 6: combine
        trace_stage!(STAGE_COMBINE);
        observer.on_stage_start(STAGE_COMBINE);
        let clock = StageClock::start();
        let keywords = find_important(
            &label(buckets.words, Bucket::Ordinary),
            &label(buckets.capitalized, Bucket::Capitalized),
            &label(buckets.numbers, Bucket::Numeric),
            self.config.max_words,
        );
        let report = StageReportBuilder::new(clock.elapsed())
            .words_out(keywords.len())
            .build();
        observer.on_stage_end(STAGE_COMBINE, &report);

        KeywordResult {
            keywords,
            total_tokens: words.total(),
            distinct_tokens: words.len(),
        }
    }
}

fn label(list: Vec<RankedWord>, bucket: Bucket) -> Vec<Keyword> {
    list.into_iter()
        .map(|r| Keyword {
            word: r.word,
            count: r.count,
            bucket,
        })
        .collect()
}

/// The `max_length` most important words in `lines`.
///
/// Uses the literal strip rule and the built-in common-word list.
///
/// ```
/// let best = topic_words::best_words(["Rust rust Rust. Cargo builds crates."], 2);
/// assert_eq!(best, vec!["Cargo", "rust"]);
/// ```
pub fn best_words<I, S>(lines: I, max_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Pipeline::new()
        .with_max_words(max_length)
        .run_lines(lines, &mut NoopObserver)
        .into_words()
}

// ============================================================================
// Tests
// ============================================================================
