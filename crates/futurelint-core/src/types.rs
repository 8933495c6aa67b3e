//! Core types for violations and run results.

use crate::flags::FileFlags;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A lint violation found in one file.
///
/// Violations are results, not errors: they are accumulated and returned,
/// never propagated as failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g. "FL001").
    pub code: String,
    /// Rule name (e.g. "require-absolute-import").
    pub rule: String,
    /// File the violation was found in.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// The outcome of analyzing one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    /// File that was analyzed.
    pub path: PathBuf,
    /// Final marker flags at end of file.
    pub flags: FileFlags,
    /// Number of significant lines the scanner produced.
    pub significant_lines: usize,
    /// Violations produced for this file.
    pub violations: Vec<Violation>,
}

impl FileAnalysis {
    /// Number of violations produced for this file.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// An operational error for one input path.
///
/// Distinct from the violation taxonomy: a failure aborts that path's
/// analysis and is never counted as a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanFailure {
    /// Path that could not be analyzed.
    pub path: PathBuf,
    /// Description of the failure.
    pub error: String,
}

impl ScanFailure {
    /// Creates a new failure record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} (skipped)", self.path.display(), self.error)
    }
}

/// Aggregate result of one run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, in file order.
    pub violations: Vec<Violation>,
    /// Operational errors encountered along the way.
    pub failures: Vec<ScanFailure>,
    /// Number of files successfully analyzed.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any file produced a violation.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Returns true if any operational error was recorded.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Returns true if the run found nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        !self.has_violations() && !self.has_failures()
    }

    /// Folds one file's outcome into the aggregate.
    pub fn record(&mut self, analysis: FileAnalysis) {
        self.files_checked += 1;
        self.violations.extend(analysis.violations);
    }

    /// Merges another result into this one.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.failures.extend(other.failures);
        self.files_checked += other.files_checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_display_is_path_colon_message() {
        let v = Violation::new("FL003", "no-debug-print", "pkg/mod.py", "left over print statement");
        assert_eq!(v.to_string(), "pkg/mod.py: left over print statement");
    }

    #[test]
    fn violation_count_matches_list_length() {
        let analysis = FileAnalysis {
            path: PathBuf::from("a.py"),
            flags: FileFlags::default(),
            significant_lines: 3,
            violations: vec![
                Violation::new("FL001", "require-absolute-import", "a.py", "m"),
                Violation::new("FL003", "no-debug-print", "a.py", "m"),
            ],
        };
        assert_eq!(analysis.violation_count(), analysis.violations.len());
    }

    #[test]
    fn failures_are_not_violations() {
        let mut result = LintResult::new();
        result.failures.push(ScanFailure::new("gone.py", "not found"));
        assert!(!result.has_violations());
        assert!(result.has_failures());
        assert!(!result.is_clean());
    }

    #[test]
    fn record_accumulates_files_and_violations() {
        let mut result = LintResult::new();
        result.record(FileAnalysis {
            path: PathBuf::from("a.py"),
            flags: FileFlags::default(),
            significant_lines: 1,
            violations: vec![Violation::new("FL001", "require-absolute-import", "a.py", "m")],
        });
        result.record(FileAnalysis {
            path: PathBuf::from("b.py"),
            flags: FileFlags::default(),
            significant_lines: 0,
            violations: Vec::new(),
        });
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.violations.len(), 1);
    }
}
