//! Rule requiring `from __future__ import absolute_import`.
//!
//! # Rationale
//!
//! Python 2's implicit relative imports silently shadow standard-library
//! modules. The `absolute_import` future import gives every file Python 3
//! import semantics, so each nontrivial module must carry it.
//!
//! # Suppression
//!
//! A trailing `# noqa` annotation removes a line from analysis entirely.

use futurelint_core::{FileSummary, Rule, Violation};

/// Rule code for require-absolute-import.
pub const CODE: &str = "FL001";

/// Rule name for require-absolute-import.
pub const NAME: &str = "require-absolute-import";

/// Requires the absolute-import future import in every nontrivial file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequireAbsoluteImport;

impl RequireAbsoluteImport {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for RequireAbsoluteImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires 'from __future__ import absolute_import'"
    }

    fn check(&self, summary: &FileSummary<'_>) -> Option<Violation> {
        if summary.flags.absolute_import {
            None
        } else {
            Some(Violation::new(
                CODE,
                NAME,
                summary.path,
                "missing 'from __future__ import absolute_import'",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futurelint_core::FileFlags;
    use std::path::Path;

    fn check(flags: FileFlags) -> Option<Violation> {
        RequireAbsoluteImport::new().check(&FileSummary {
            path: Path::new("pkg/mod.py"),
            flags: &flags,
            significant_lines: 1,
        })
    }

    #[test]
    fn fires_when_import_missing() {
        let violation = check(FileFlags::default()).expect("should fire");
        assert_eq!(violation.code, CODE);
        assert_eq!(
            violation.to_string(),
            "pkg/mod.py: missing 'from __future__ import absolute_import'"
        );
    }

    #[test]
    fn silent_when_import_present() {
        let flags = FileFlags {
            absolute_import: true,
            ..FileFlags::default()
        };
        assert!(check(flags).is_none());
    }
}
