//! Per-file marker accumulation.

use crate::patterns::{PatternKind, PatternSet};
use serde::{Deserialize, Serialize};

/// Keys for the four per-file marker flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKey {
    /// `from __future__ import absolute_import` observed.
    AbsoluteImport,
    /// `from __future__ import with_statement` observed.
    WithImport,
    /// A `with` statement observed.
    WithUsage,
    /// A debug-looking `print(...)` observed.
    DebugPrint,
}

/// Fixed marker dispatch order. Detection patterns are tested independently;
/// a single line may set several flags.
const MARKERS: [(MarkerKey, PatternKind); 4] = [
    (MarkerKey::AbsoluteImport, PatternKind::AbsoluteImport),
    (MarkerKey::WithImport, PatternKind::WithImport),
    (MarkerKey::WithUsage, PatternKind::WithUsage),
    (MarkerKey::DebugPrint, PatternKind::DebugPrint),
];

/// Per-file accumulator of marker observations.
///
/// All flags start false and only ever transition false to true while the
/// file's significant lines are consumed. Owned by a single file analysis;
/// nothing is shared across files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFlags {
    /// The absolute-import future import was seen.
    pub absolute_import: bool,
    /// The with-statement future import was seen.
    pub with_import: bool,
    /// A with statement was seen.
    pub with_usage: bool,
    /// A debug-looking print call was seen.
    pub debug_print: bool,
}

impl FileFlags {
    /// Creates a fresh accumulator with all flags false.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tests one significant line against every marker pattern, latching any
    /// flag whose pattern matches.
    pub fn observe(&mut self, patterns: &PatternSet, line: &str) {
        for (key, kind) in MARKERS {
            if patterns.matches(kind, line) {
                self.set(key);
            }
        }
    }

    /// Returns the flag for `key`.
    #[must_use]
    pub fn get(self, key: MarkerKey) -> bool {
        match key {
            MarkerKey::AbsoluteImport => self.absolute_import,
            MarkerKey::WithImport => self.with_import,
            MarkerKey::WithUsage => self.with_usage,
            MarkerKey::DebugPrint => self.debug_print,
        }
    }

    fn set(&mut self, key: MarkerKey) {
        match key {
            MarkerKey::AbsoluteImport => self.absolute_import = true,
            MarkerKey::WithImport => self.with_import = true,
            MarkerKey::WithUsage => self.with_usage = true,
            MarkerKey::DebugPrint => self.debug_print = true,
        }
    }
}
