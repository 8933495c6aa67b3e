//! The fixed set of compiled line-classification patterns.
//!
//! All patterns are anchored at line start except [`PatternKind::MultilineEnd`],
//! which is a containment test: a block is closed by a delimiter appearing
//! anywhere on the line.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Intent tag for each pattern in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Line whose first non-whitespace character is `#`.
    LineComment,
    /// Triple-quote delimiter opened and closed on the same line.
    MultilineOpenClose,
    /// Line opening a triple-quote block without closing it.
    MultilineStart,
    /// Line containing a closing triple-quote delimiter (non-anchored).
    MultilineEnd,
    /// Trailing `# noqa` annotation suppressing the line.
    Suppression,
    /// `from __future__ import absolute_import`.
    AbsoluteImport,
    /// `from __future__ import with_statement`.
    WithImport,
    /// A `with` statement at line start (leading whitespace allowed).
    WithUsage,
    /// A `print(...)` call whose first string argument looks like debug output.
    DebugPrint,
}

const LINE_COMMENT: &str = r"^\s*#";
const MULTILINE_OPEN_CLOSE: &str = r#"^\s*(?:'''|""").+?(?:'''|""")"#;
const MULTILINE_START: &str = r#"^\s*(?:'''|""")"#;
const MULTILINE_END: &str = r#"(?:'''|""")"#;
const SUPPRESSION: &str = r"^.+?#\s+noqa";
const ABSOLUTE_IMPORT: &str = r"^from\s+__future__\s+import\s+absolute_import";
const WITH_IMPORT: &str = r"^from\s+__future__\s+import\s+with_statement";
const WITH_USAGE: &str = r"^\s*with\s";
const DEBUG_PRINT: &str = r#"^\s*print\(["'](?:\W+?)?[A-Z0-9:]{2,}"#;

/// Error raised when a built-in pattern fails to compile.
///
/// This can only be triggered by a malformed pattern literal, never by
/// end-user input; callers treat it as a fatal initialization error.
#[derive(Debug, Error)]
#[error("invalid built-in pattern {kind:?}: {source}")]
pub struct PatternError {
    /// The pattern that failed to compile.
    pub kind: PatternKind,
    /// Underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// The compiled pattern set, built once and shared read-only.
#[derive(Debug)]
pub struct PatternSet {
    line_comment: Regex,
    multiline_open_close: Regex,
    multiline_start: Regex,
    multiline_end: Regex,
    suppression: Regex,
    absolute_import: Regex,
    with_import: Regex,
    with_usage: Regex,
    debug_print: Regex,
}

impl PatternSet {
    /// Compiles the full pattern set.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] if a pattern literal is malformed. This is a
    /// programming error, not a runtime condition.
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            line_comment: compile(PatternKind::LineComment, LINE_COMMENT)?,
            multiline_open_close: compile(PatternKind::MultilineOpenClose, MULTILINE_OPEN_CLOSE)?,
            multiline_start: compile(PatternKind::MultilineStart, MULTILINE_START)?,
            multiline_end: compile(PatternKind::MultilineEnd, MULTILINE_END)?,
            suppression: compile(PatternKind::Suppression, SUPPRESSION)?,
            absolute_import: compile(PatternKind::AbsoluteImport, ABSOLUTE_IMPORT)?,
            with_import: compile(PatternKind::WithImport, WITH_IMPORT)?,
            with_usage: compile(PatternKind::WithUsage, WITH_USAGE)?,
            debug_print: compile(PatternKind::DebugPrint, DEBUG_PRINT)?,
        })
    }

    /// Returns the process-wide shared pattern set.
    #[must_use]
    pub fn shared() -> &'static Self {
        // Invariant: the pattern literals above are fixed at build time.
        #[allow(clippy::expect_used)]
        static SHARED: Lazy<PatternSet> =
            Lazy::new(|| PatternSet::new().expect("built-in patterns must compile"));
        &SHARED
    }

    /// Looks up the compiled pattern for an intent tag.
    #[must_use]
    pub fn get(&self, kind: PatternKind) -> &Regex {
        match kind {
            PatternKind::LineComment => &self.line_comment,
            PatternKind::MultilineOpenClose => &self.multiline_open_close,
            PatternKind::MultilineStart => &self.multiline_start,
            PatternKind::MultilineEnd => &self.multiline_end,
            PatternKind::Suppression => &self.suppression,
            PatternKind::AbsoluteImport => &self.absolute_import,
            PatternKind::WithImport => &self.with_import,
            PatternKind::WithUsage => &self.with_usage,
            PatternKind::DebugPrint => &self.debug_print,
        }
    }

    /// Tests a line against the pattern for `kind`.
    #[must_use]
    pub fn matches(&self, kind: PatternKind, line: &str) -> bool {
        self.get(kind).is_match(line)
    }
}

fn compile(kind: PatternKind, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError { kind, source })
}
