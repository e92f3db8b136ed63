use crate::constants::CSS_STATE_TO_ARIA;
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{class_token_contains, has_attribute};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Trait implementation for the `no_css_only_state` rule
pub struct NoCssOnlyStateRuleImpl;

impl LintRule for NoCssOnlyStateRuleImpl {
    fn name(&self) -> &'static str {
        "no_css_only_state"
    }

    fn description(&self) -> &'static str {
        "Disallow communicating element state only through CSS classes; agents need queryable ARIA attributes"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl ElementLintRule for NoCssOnlyStateRuleImpl {
    fn check(
        &self,
        element: &Element,
        _options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        // First match in declaration order wins; remaining patterns surface
        // on a later run once this one is fixed.
        for pattern in CSS_STATE_TO_ARIA {
            if !class_token_contains(element, pattern.class_pattern) {
                continue;
            }

            let has_aria_equivalent = has_attribute(element, pattern.aria_attribute)
                || (pattern.class_pattern == "disabled" && has_attribute(element, "disabled"));
            if has_aria_equivalent {
                continue;
            }

            let aria_value = if pattern.inverse { "false" } else { "true" };
            let aria_attr = pattern.aria_attribute;
            return Some(
                LintDiagnostic::new(
                    element.span.into(),
                    self.default_severity(),
                    self.name(),
                    "css_only_state",
                    format!(
                        "Element state \"{}\" is only communicated via CSS class. Agents cannot \
                         interpret visual styles; add `{aria_attr}` to expose this state \
                         programmatically.",
                        pattern.class_pattern
                    ),
                )
                .with_data("state", pattern.class_pattern)
                .with_data("aria_attribute", aria_attr)
                .with_fix(CodeFix::new(
                    format!("Add {aria_attr}=\"{aria_value}\""),
                    edits::insert_attribute(element, &format!("{aria_attr}=\"{aria_value}\"")),
                )),
            );
        }

        None
    }
}
