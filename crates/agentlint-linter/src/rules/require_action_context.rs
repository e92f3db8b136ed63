use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{element_tag, has_attribute};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Attributes that give a form an accessible name
const FORM_NAME_ATTRIBUTES: &[&str] = &["aria-label", "aria-labelledby", "name"];

/// Trait implementation for the `require_action_context` rule
pub struct RequireActionContextRuleImpl;

impl LintRule for RequireActionContextRuleImpl {
    fn name(&self) -> &'static str {
        "require_action_context"
    }

    fn description(&self) -> &'static str {
        "Forms must have an accessible name so agents can identify their purpose"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl ElementLintRule for RequireActionContextRuleImpl {
    fn check(
        &self,
        element: &Element,
        _options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        if element_tag(element) != "form" {
            return None;
        }

        let has_name = FORM_NAME_ATTRIBUTES
            .iter()
            .any(|name| has_attribute(element, name));
        if has_name {
            return None;
        }

        Some(
            LintDiagnostic::new(
                element.span.into(),
                self.default_severity(),
                self.name(),
                "form_missing_name",
                "<form> has no accessible name. Agents need to distinguish between forms; add \
                 `aria-label` or `aria-labelledby`.",
            )
            .with_fix(CodeFix::new(
                "Add a placeholder aria-label",
                edits::insert_attribute(element, "aria-label=\"TODO: describe this form\""),
            )),
        )
    }
}
