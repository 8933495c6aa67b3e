//! # futurelint-rules
//!
//! Built-in lint rules for futurelint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FL001 | `require-absolute-import` | Requires `from __future__ import absolute_import` |
//! | FL002 | `require-with-import` | Requires `from __future__ import with_statement` when `with` is used |
//! | FL003 | `no-debug-print` | Forbids leftover debug `print(...)` calls |
//!
//! ## Usage
//!
//! ```ignore
//! use futurelint_core::Analyzer;
//! use futurelint_rules::default_rules;
//!
//! let mut builder = Analyzer::builder().path("./pkg");
//! for rule in default_rules(false) {
//!     builder = builder.rule_box(rule);
//! }
//! let analyzer = builder.build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod no_debug_print;
mod presets;
mod require_absolute_import;
mod require_with_import;

pub use no_debug_print::NoDebugPrint;
pub use presets::{all_rules, default_rules};
pub use require_absolute_import::RequireAbsoluteImport;
pub use require_with_import::RequireWithImport;

/// Re-export core types for convenience.
pub use futurelint_core::{Rule, Violation};
