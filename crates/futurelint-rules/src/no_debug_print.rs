//! Rule forbidding leftover debug `print(...)` calls.
//!
//! Detection is a heuristic: a `print(` call whose first string argument
//! starts with punctuation or a run of uppercase characters, the shape of
//! temporary debug output (`print("ERROR: ...")`, `print("!!! here")`).
//! Intentional user-facing prints with ordinary text do not match.

use futurelint_core::{FileSummary, Rule, Violation};

/// Rule code for no-debug-print.
pub const CODE: &str = "FL003";

/// Rule name for no-debug-print.
pub const NAME: &str = "no-debug-print";

/// Flags files containing a debug-looking print call.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDebugPrint;

impl NoDebugPrint {
    /// Creates a new rule instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDebugPrint {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids leftover debug print(...) calls"
    }

    fn check(&self, summary: &FileSummary<'_>) -> Option<Violation> {
        if summary.flags.debug_print {
            Some(Violation::new(
                CODE,
                NAME,
                summary.path,
                "left over print statement",
            ))
        } else {
            None
        }
    }
}
