//! Rule requiring `from __future__ import with_statement` where `with` is used.
//!
//! # Rationale
//!
//! On Python 2.5 the `with` statement only exists behind the
//! `with_statement` future import; code that uses `with` without it fails
//! to even compile there. Codebases that target 2.6+ can disable this rule
//! (`--py26`), where the import is implied by the runtime.

use futurelint_core::{FileSummary, Rule, Violation};

/// Rule code for require-with-import.
pub const CODE: &str = "FL002";

/// Rule name for require-with-import.
pub const NAME: &str = "require-with-import";

/// Requires the with-statement future import in files that use `with`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireWithImport;

impl RequireWithImport {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequireWithImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires 'from __future__ import with_statement' when 'with' is used"
    }

    fn check(&self, summary: &FileSummary<'_>) -> Option<Violation> {
        if summary.flags.with_usage && !summary.flags.with_import {
            Some(Violation::new(
                CODE,
                NAME,
                summary.path,
                "missing 'from __future__ import with_statement'",
            ))
        } else {
            None
        }
    }
}
