//! Pipeline observer: hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has an empty default, so an observer only
//! implements what it cares about.

use std::time::{Duration, Instant};

use crate::pipeline::artifacts::Buckets;
use crate::types::WordFrequencies;

pub const STAGE_COUNT: &str = "count";
pub const STAGE_NUMBERS: &str = "numbers";
pub const STAGE_CAPITALIZED: &str = "capitalized";
pub const STAGE_RANK: &str = "rank";
pub const STAGE_FILTER: &str = "filter";
pub const STAGE_COMBINE: &str = "combine";

/// Every stage, in run order
pub const ALL_STAGES: [&str; 6] = [
    STAGE_COUNT,
    STAGE_NUMBERS,
    STAGE_CAPITALIZED,
    STAGE_RANK,
    STAGE_FILTER,
    STAGE_COMBINE,
];

// ============================================================================
// Stage reports
// ============================================================================

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What happened during one stage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StageReport {
    elapsed: Duration,
    words_in: Option<usize>,
    words_out: Option<usize>,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of distinct words entering the stage
    pub fn words_in(&self) -> Option<usize> {
        self.words_in
    }

    /// Number of distinct words leaving the stage
    pub fn words_out(&self) -> Option<usize> {
        self.words_out
    }
}

/// Builder for [`StageReport`]s carrying word counts
#[derive(Debug)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            report: StageReport::new(elapsed),
        }
    }

    pub fn words_in(mut self, n: usize) -> Self {
        self.report.words_in = Some(n);
        self
    }

    pub fn words_out(mut self, n: usize) -> Self {
        self.report.words_out = Some(n);
        self
    }

    pub fn build(self) -> StageReport {
        self.report
    }
}

// ============================================================================
// Observer trait and implementations
// ============================================================================

/// Receives callbacks while a pipeline runs.
pub trait PipelineObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Called once with the raw frequency mapping
    fn on_frequencies(&mut self, _words: &WordFrequencies) {}

    /// Called once with the filtered buckets, before they are combined
    fn on_buckets(&mut self, _buckets: &Buckets) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a [`StageReport`] per stage
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports in the order stages finished
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a named stage
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, r)| r)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.elapsed()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

/// Observer that emits a `tracing` event per finished stage
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PipelineObserver for TracingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        tracing::info!(
            stage,
            elapsed_us = report.elapsed().as_micros() as u64,
            words_in = report.words_in(),
            words_out = report.words_out(),
            "stage finished"
        );
    }

    fn on_buckets(&mut self, buckets: &Buckets) {
        tracing::debug!(
            capitalized = buckets.capitalized.len(),
            numbers = buckets.numbers.len(),
            words = buckets.words.len(),
            "buckets ready"
        );
    }
}
