//! Configuration checks.
//!
//! [`validate_config`] inspects a [`KeywordConfig`] and collects every
//! finding into a [`ValidationReport`], so callers see all problems at once.
//!
//! ```rust
//! use topic_words::pipeline::validation::validate_config;
//! use topic_words::types::KeywordConfig;
//!
//! assert!(validate_config(&KeywordConfig::default()).is_valid());
//! ```

use std::fmt;

use serde::Serialize;

use crate::types::KeywordConfig;

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found in a configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    /// Stable machine-readable code (e.g. `"zero_max_words"`)
    pub code: &'static str,
    /// JSON-pointer style path of the offending field
    pub path: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub issue: ConfigIssue,
}

/// Every diagnostic found in one configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, code: &'static str, path: &'static str, message: &str) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            issue: ConfigIssue {
                code,
                path,
                message: message.to_string(),
            },
        });
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &ConfigIssue> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| &d.issue)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigIssue> {
        self.with_severity(Severity::Warning)
    }

    /// `true` when there are no errors; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }
}

/// Check `cfg`: a zero result count is an error, and running without the
/// common-word filter is a warning.
pub fn validate_config(cfg: &KeywordConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    if cfg.max_words == 0 {
        report.push(
            Severity::Error,
            "zero_max_words",
            "/max_words",
            "max_words must be greater than 0",
        );
    }
    if !cfg.filter_common_words {
        report.push(
            Severity::Warning,
            "filter_disabled",
            "/filter_common_words",
            "common words such as \"the\" will be ranked",
        );
    }
    report
}
