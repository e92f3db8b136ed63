//! Registry of all available lint rules.
//!
//! Declaration order is meaningful: when several rules insert at the same
//! anchor on one element, the fix applier lands the generated attributes in
//! this order.

use crate::rules::{
    NoCssOnlyStateRuleImpl, NoDynamicPositionInstabilityRuleImpl, NoHoverOnlyActionRuleImpl,
    RequireActionContextRuleImpl, RequireModalDismissRuleImpl, RequireSemanticInteractiveRuleImpl,
    RequireStableSelectorRuleImpl,
};
use crate::traits::{ElementLintRule, GuardedElementLintRule};
use std::sync::Arc;

/// Get all element lint rules
///
/// These rules run once per element in the markup tree.
#[must_use]
pub fn element_rules() -> Vec<Arc<dyn ElementLintRule>> {
    vec![
        Arc::new(RequireStableSelectorRuleImpl),
        Arc::new(NoHoverOnlyActionRuleImpl),
        Arc::new(NoCssOnlyStateRuleImpl),
        Arc::new(RequireSemanticInteractiveRuleImpl),
        Arc::new(RequireActionContextRuleImpl),
        Arc::new(RequireModalDismissRuleImpl),
    ]
}

/// Get all guarded-element lint rules
///
/// These rules run once per element rendered behind a boolean `&&` guard.
#[must_use]
pub fn guarded_element_rules() -> Vec<Arc<dyn GuardedElementLintRule>> {
    vec![Arc::new(NoDynamicPositionInstabilityRuleImpl)]
}

/// All rule identifiers, element rules first, in declaration order.
#[must_use]
pub fn all_rule_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = element_rules().iter().map(|rule| rule.name()).collect();
    names.extend(guarded_element_rules().iter().map(|rule| rule.name()));
    names
}
