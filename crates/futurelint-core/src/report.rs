//! Violation emission sinks.
//!
//! Each violation is reported to a sink at the moment it is produced,
//! separately from the returned violation list. Quiet mode swaps the sink,
//! never the returned count, so both behaviors stay independently testable.

use crate::types::Violation;

/// Observer invoked once per violation as it is produced.
pub trait ViolationSink {
    /// Reports one violation.
    fn report(&mut self, violation: &Violation);
}

/// Sink that writes one `<path>: <message>` line per violation to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl ViolationSink for StderrSink {
    fn report(&mut self, violation: &Violation) {
        eprintln!("{violation}");
    }
}

/// Sink that discards everything (quiet mode).
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ViolationSink for NullSink {
    fn report(&mut self, _violation: &Violation) {}
}
