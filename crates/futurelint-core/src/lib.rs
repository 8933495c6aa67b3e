//! # futurelint-core
//!
//! Core framework for checking Python 2-era sources for forward-compatibility
//! hygiene: missing `__future__` imports and leftover debug prints.
//!
//! This crate provides the building blocks the CLI is assembled from:
//!
//! - [`PatternSet`] - the fixed, compiled set of line-classification patterns
//! - [`Scanner`] - the comment/suppression-stripping line scanner
//! - [`FileFlags`] - per-file marker accumulator driving rule evaluation
//! - [`Rule`] trait for flag-based rules
//! - [`Analyzer`] for orchestrating a run over files and directories
//! - [`Violation`] and [`LintResult`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use futurelint_core::{Analyzer, StderrSink};
//!
//! let analyzer = Analyzer::builder()
//!     .path("./src")
//!     .rule(my_rule)
//!     .build()?;
//!
//! let result = analyzer.analyze(&mut StderrSink)?;
//! std::process::exit(i32::from(result.has_violations()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod flags;
mod patterns;
mod report;
mod rule;
mod scanner;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, SOURCE_EXTENSION};
pub use config::{Config, ConfigError};
pub use flags::{FileFlags, MarkerKey};
pub use patterns::{PatternError, PatternKind, PatternSet};
pub use report::{NullSink, StderrSink, ViolationSink};
pub use rule::{FileSummary, Rule, RuleBox};
pub use scanner::{Scanner, SignificantLines};
pub use types::{FileAnalysis, LintResult, ScanFailure, Violation};
