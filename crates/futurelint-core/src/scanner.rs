//! The line scanner: strips comments and suppressed lines, yielding only
//! significant code lines.
//!
//! The scanner is a pure single-pass filter. Its only state is whether the
//! current position is inside a triple-quote block; that state lives for one
//! invocation and is never shared across files.

use crate::patterns::{PatternKind, PatternSet};

/// Entry point for scanning one file's lines.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'p> {
    patterns: &'p PatternSet,
}

impl<'p> Scanner<'p> {
    /// Creates a scanner over the given pattern set.
    #[must_use]
    pub fn new(patterns: &'p PatternSet) -> Self {
        Self { patterns }
    }

    /// Scans raw lines, yielding only the significant ones in input order.
    ///
    /// Each call starts from fresh state; the returned iterator is
    /// single-pass and not restartable.
    pub fn scan<'a, I>(&self, lines: I) -> SignificantLines<'p, I::IntoIter>
    where
        I: IntoIterator<Item = &'a str>,
    {
        SignificantLines {
            patterns: self.patterns,
            lines: lines.into_iter(),
            in_block: false,
        }
    }
}

/// Iterator over the significant lines of one file.
///
/// Classification per line, first match wins:
///
/// 1. Inside a block: the line is dropped; a closing delimiter anywhere on
///    it ends the block. The closing line itself is dropped in full, even
///    when code follows the delimiter.
/// 2. Trailing `# noqa` annotation: dropped.
/// 3. Triple-quote opened and closed on one line: dropped.
/// 4. Triple-quote opened only: dropped, block state entered.
/// 5. Line comment: dropped.
/// 6. Anything else is yielded as significant.
#[derive(Debug)]
pub struct SignificantLines<'p, I> {
    patterns: &'p PatternSet,
    lines: I,
    in_block: bool,
}

impl<'p, 'a, I> Iterator for SignificantLines<'p, I>
where
    I: Iterator<Item = &'a str>,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;

            if self.in_block {
                if self.patterns.matches(PatternKind::MultilineEnd, line) {
                    self.in_block = false;
                }
                continue;
            }

            if self.patterns.matches(PatternKind::Suppression, line)
                || self.patterns.matches(PatternKind::MultilineOpenClose, line)
            {
                continue;
            }
            if self.patterns.matches(PatternKind::MultilineStart, line) {
                self.in_block = true;
                continue;
            }
            if self.patterns.matches(PatternKind::LineComment, line) {
                continue;
            }

            return Some(line);
        }
    }
}
