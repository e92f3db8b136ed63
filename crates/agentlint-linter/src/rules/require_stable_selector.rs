use crate::constants::{INTERACTIVE_ELEMENTS, INTERACTIVE_HANDLERS, STABLE_SELECTOR_ATTRIBUTES};
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{element_tag, has_any_attribute, has_event_handler};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;
use serde::Deserialize;

/// Options for the `require_stable_selector` rule
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StableSelectorOptions {
    /// Additional attribute names to accept as stable selectors
    #[serde(default)]
    pub additional_attributes: Vec<String>,
}

/// Trait implementation for the `require_stable_selector` rule
pub struct RequireStableSelectorRuleImpl;

impl LintRule for RequireStableSelectorRuleImpl {
    fn name(&self) -> &'static str {
        "require_stable_selector"
    }

    fn description(&self) -> &'static str {
        "Require interactive elements to have a stable selector for agent interaction"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl ElementLintRule for RequireStableSelectorRuleImpl {
    fn check(
        &self,
        element: &Element,
        options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        let options: StableSelectorOptions = options
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or_default();

        let tag = element_tag(element);
        let is_interactive_element = INTERACTIVE_ELEMENTS.contains(&tag.as_str());
        let has_interactive_handler = has_event_handler(element, INTERACTIVE_HANDLERS);
        if !is_interactive_element && !has_interactive_handler {
            return None;
        }

        let mut stable_attrs: Vec<&str> = STABLE_SELECTOR_ATTRIBUTES.to_vec();
        stable_attrs.extend(options.additional_attributes.iter().map(String::as_str));
        if has_any_attribute(element, &stable_attrs) {
            return None;
        }

        let display_tag = if tag.is_empty() { "unknown" } else { tag.as_str() };
        let agent_id = if tag.is_empty() { "element" } else { tag.as_str() };

        Some(
            LintDiagnostic::new(
                element.span.into(),
                self.default_severity(),
                self.name(),
                "missing_stable_selector",
                format!(
                    "Interactive element <{display_tag}> has no stable selector. Agents need a \
                     reliable way to find this element across builds. Add a `data-agent-id`, \
                     `data-testid`, or `id` attribute."
                ),
            )
            .with_data("element", display_tag)
            .with_fix(CodeFix::new(
                format!("Add data-agent-id=\"{agent_id}\""),
                edits::insert_attribute(element, &format!("data-agent-id=\"{agent_id}\"")),
            )),
        )
    }
}
