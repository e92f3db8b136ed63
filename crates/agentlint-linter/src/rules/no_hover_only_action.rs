use crate::constants::{FOCUS_HANDLERS, HOVER_HANDLERS};
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{has_attribute, has_event_handler};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Trait implementation for the `no_hover_only_action` rule
pub struct NoHoverOnlyActionRuleImpl;

impl LintRule for NoHoverOnlyActionRuleImpl {
    fn name(&self) -> &'static str {
        "no_hover_only_action"
    }

    fn description(&self) -> &'static str {
        "Disallow actions that are only reachable via hover; agents cannot hover"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl ElementLintRule for NoHoverOnlyActionRuleImpl {
    fn check(
        &self,
        element: &Element,
        _options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        if !has_event_handler(element, HOVER_HANDLERS) {
            return None;
        }
        if has_event_handler(element, FOCUS_HANDLERS) {
            return None;
        }

        let handlers = element
            .named_attributes()
            .filter(|attr| HOVER_HANDLERS.contains(&attr.name.as_str()))
            .map(|attr| attr.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut diagnostic = LintDiagnostic::new(
            element.span.into(),
            self.default_severity(),
            self.name(),
            "hover_only_action",
            format!(
                "This element uses hover handlers ({handlers}) without focus alternatives. \
                 Agents cannot hover; add onFocus/onBlur handlers or a click-based toggle."
            ),
        )
        .with_data("handlers", handlers);

        // A tabIndex may already exist in a form we cannot safely duplicate;
        // report without an edit in that case.
        if !has_attribute(element, "tabIndex") {
            diagnostic = diagnostic.with_fix(CodeFix::new(
                "Add tabIndex={0}",
                edits::insert_attribute(element, "tabIndex={0}"),
            ));
        }

        Some(diagnostic)
    }
}
