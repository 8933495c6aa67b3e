//! Rule trait for flag-based rules.

use crate::flags::FileFlags;
use crate::types::Violation;
use std::path::Path;

/// End-of-file summary handed to rules.
///
/// Rules never see raw lines; by the time they run, the scanner and the
/// marker accumulator have reduced the file to its flags.
#[derive(Debug, Clone, Copy)]
pub struct FileSummary<'a> {
    /// Path of the analyzed file.
    pub path: &'a Path,
    /// Final marker flags.
    pub flags: &'a FileFlags,
    /// Number of significant lines the scanner produced.
    pub significant_lines: usize,
}

/// A per-file lint rule evaluated against the accumulated [`FileFlags`].
///
/// Rules are independent of each other and each produces at most one
/// violation per file.
///
/// # Example
///
/// ```ignore
/// use futurelint_core::{FileSummary, Rule, Violation};
///
/// pub struct NoDebugPrint;
///
/// impl Rule for NoDebugPrint {
///     fn name(&self) -> &'static str { "no-debug-print" }
///     fn code(&self) -> &'static str { "FL003" }
///
///     fn check(&self, summary: &FileSummary<'_>) -> Option<Violation> {
///         summary.flags.debug_print.then(|| {
///             Violation::new(self.code(), self.name(), summary.path, "left over print statement")
///         })
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "no-debug-print").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g. "FL003").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks one file's summary, returning a violation if the rule fires.
    fn check(&self, summary: &FileSummary<'_>) -> Option<Violation>;
}

/// Type alias for boxed [`Rule`] trait objects.
pub type RuleBox = Box<dyn Rule>;
