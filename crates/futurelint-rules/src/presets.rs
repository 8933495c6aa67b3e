//! Rule set constructors.

use crate::{NoDebugPrint, RequireAbsoluteImport, RequireWithImport};
use futurelint_core::RuleBox;

/// Returns the default rule set.
///
/// With `py26` enabled, `require-with-import` (FL002) is omitted entirely:
/// on Python 2.6+ the `with_statement` future import is implied by the
/// runtime and the rule never applies.
#[must_use]
pub fn default_rules(py26: bool) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = vec![Box::new(RequireAbsoluteImport::new())];
    if !py26 {
        rules.push(Box::new(RequireWithImport::new()));
    }
    rules.push(Box::new(NoDebugPrint::new()));
    rules
}

/// Returns every built-in rule, regardless of target runtime.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(RequireAbsoluteImport::new()),
        Box::new(RequireWithImport::new()),
        Box::new(NoDebugPrint::new()),
    ]
}
