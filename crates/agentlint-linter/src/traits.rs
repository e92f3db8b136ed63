//! Trait hierarchy for lint rules.
//!
//! The host traversal owns tree-walking order and decides which entry point
//! to call for which node kind; rules are plain functions over one element.

use crate::diagnostics::{LintDiagnostic, Severity};
use agentlint_syntax::Element;

/// Base trait for all lint rules
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule (e.g. `"require_stable_selector"`)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Default severity (can be overridden by config)
    fn default_severity(&self) -> Severity;
}

/// Lint rule keyed to the element-visitation event: invoked once per element
/// in the tree.
///
/// Returning `Option` bounds a rule to one diagnostic per element per pass.
/// The `options` parameter carries rule-specific configuration; a rule that
/// takes options defines its own struct and deserializes from this value.
pub trait ElementLintRule: LintRule {
    fn check(
        &self,
        element: &Element,
        options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic>;
}

/// Lint rule keyed to the conditional-render event: invoked once per element
/// that appears as the right-hand operand of a boolean `&&` render guard.
pub trait GuardedElementLintRule: LintRule {
    fn check(&self, element: &Element) -> Option<LintDiagnostic>;
}
