use crate::constants::{INTERACTIVE_ELEMENTS, INTERACTIVE_HANDLERS, STABLE_SELECTOR_ATTRIBUTES};
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{element_tag, has_any_attribute, has_event_handler};
use crate::traits::{GuardedElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Trait implementation for the `no_dynamic_position_instability` rule
pub struct NoDynamicPositionInstabilityRuleImpl;

impl LintRule for NoDynamicPositionInstabilityRuleImpl {
    fn name(&self) -> &'static str {
        "no_dynamic_position_instability"
    }

    fn description(&self) -> &'static str {
        "Conditionally rendered interactive elements need stable identifiers so agents can find them regardless of render order"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl GuardedElementLintRule for NoDynamicPositionInstabilityRuleImpl {
    fn check(&self, element: &Element) -> Option<LintDiagnostic> {
        let tag = element_tag(element);
        let is_interactive = INTERACTIVE_ELEMENTS.contains(&tag.as_str())
            || has_event_handler(element, INTERACTIVE_HANDLERS);
        if !is_interactive {
            return None;
        }

        if has_any_attribute(element, STABLE_SELECTOR_ATTRIBUTES) {
            return None;
        }

        let agent_id = if tag.is_empty() {
            "dynamic-element"
        } else {
            tag.as_str()
        };

        Some(
            LintDiagnostic::new(
                element.span.into(),
                self.default_severity(),
                self.name(),
                "unstable_dynamic_element",
                "Conditionally rendered interactive element lacks a stable identifier. Agents \
                 may not find this element reliably when its position shifts. Add a \
                 `data-agent-id` or `data-testid`.",
            )
            .with_fix(CodeFix::new(
                format!("Add data-agent-id=\"{agent_id}\""),
                edits::insert_attribute(element, &format!("data-agent-id=\"{agent_id}\"")),
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::apply_edits;
    use agentlint_syntax::parse;

    fn guarded_element(source: &str) -> Element {
        let parsed = parse(source);
        parsed
            .all_elements()
            .find(|element| element.guarded)
            .cloned()
            .unwrap()
    }

    #[test]
    fn flags_guarded_interactive_element() {
        let element = guarded_element("<div>{open && <button>Close</button>}</div>");
        let diagnostic = NoDynamicPositionInstabilityRuleImpl.check(&element).unwrap();
        assert_eq!(diagnostic.rule, "no_dynamic_position_instability");
        assert!(diagnostic.has_fix());
    }

    #[test]
    fn fix_inserts_tag_named_agent_id() {
        let source = "<div>{open && <button>Close</button>}</div>";
        let element = guarded_element(source);
        let diagnostic = NoDynamicPositionInstabilityRuleImpl.check(&element).unwrap();
        assert_eq!(
            apply_edits(source, &[diagnostic]),
            "<div>{open && <button data-agent-id=\"button\">Close</button>}</div>"
        );
    }

    #[test]
    fn flags_guarded_element_with_handler() {
        let element = guarded_element("<div>{show && <span onClick={go}>x</span>}</div>");
        assert!(NoDynamicPositionInstabilityRuleImpl
            .check(&element)
            .is_some());
    }

    #[test]
    fn skips_guarded_element_with_stable_selector() {
        let element =
            guarded_element("<div>{open && <button data-testid=\"close\">Close</button>}</div>");
        assert!(NoDynamicPositionInstabilityRuleImpl
            .check(&element)
            .is_none());
    }

    #[test]
    fn skips_guarded_non_interactive_element() {
        let element = guarded_element("<div>{open && <span>Just text</span>}</div>");
        assert!(NoDynamicPositionInstabilityRuleImpl
            .check(&element)
            .is_none());
    }

    #[test]
    fn fix_closes_the_match() {
        let source = "<div>{open && <button>Close</button>}</div>";
        let element = guarded_element(source);
        let diagnostic = NoDynamicPositionInstabilityRuleImpl.check(&element).unwrap();
        let fixed = apply_edits(source, &[diagnostic]);
        let fixed_element = guarded_element(&fixed);
        assert!(NoDynamicPositionInstabilityRuleImpl
            .check(&fixed_element)
            .is_none());
    }
}
