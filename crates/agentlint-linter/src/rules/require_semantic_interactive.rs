use crate::constants::{INTERACTIVE_HANDLERS, NON_SEMANTIC_ELEMENTS};
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{element_tag, has_event_handler, has_role};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Trait implementation for the `require_semantic_interactive` rule
pub struct RequireSemanticInteractiveRuleImpl;

impl LintRule for RequireSemanticInteractiveRuleImpl {
    fn name(&self) -> &'static str {
        "require_semantic_interactive"
    }

    fn description(&self) -> &'static str {
        "Require interactive elements to use semantic markup; a <div onClick> is invisible to agents"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }
}

impl ElementLintRule for RequireSemanticInteractiveRuleImpl {
    fn check(
        &self,
        element: &Element,
        _options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        let tag = element_tag(element);
        if !NON_SEMANTIC_ELEMENTS.contains(&tag.as_str()) {
            return None;
        }
        if !has_event_handler(element, INTERACTIVE_HANDLERS) {
            return None;
        }
        // A role makes the element at least partially visible to agents
        if has_role(element) {
            return None;
        }

        let handler = element
            .named_attributes()
            .find(|attr| INTERACTIVE_HANDLERS.contains(&attr.name.as_str()))
            .map_or("handler", |attr| attr.name.as_str());

        Some(
            LintDiagnostic::new(
                element.span.into(),
                self.default_severity(),
                self.name(),
                "non_semantic_interactive",
                format!(
                    "<{tag}> with {handler} is not a semantic interactive element. Agents rely \
                     on semantic markup to understand what elements do. Use <button>, <a>, or \
                     add an appropriate `role` attribute."
                ),
            )
            .with_data("element", tag)
            .with_data("handler", handler)
            .with_fix(CodeFix::new(
                "Add role=\"button\" and tabIndex={0}",
                edits::insert_attribute(element, "role=\"button\" tabIndex={0}"),
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edits::apply_edits;
    use agentlint_syntax::parse;

    fn check(source: &str) -> Option<LintDiagnostic> {
        let parse = parse(source);
        RequireSemanticInteractiveRuleImpl.check(&parse.roots[0], None)
    }

    #[test]
    fn flags_click_handler_on_div() {
        let source = "<div onClick={go}>Go</div>";
        let diagnostic = check(source).unwrap();
        assert_eq!(
            diagnostic.data.get("handler").map(String::as_str),
            Some("onClick")
        );
        let fixed = apply_edits(source, &[diagnostic]);
        assert_eq!(fixed, "<div onClick={go} role=\"button\" tabIndex={0}>Go</div>");
    }

    #[test]
    fn reports_first_matching_handler() {
        let diagnostic = check("<span onKeyDown={k} onClick={go}>x</span>").unwrap();
        assert_eq!(
            diagnostic.data.get("handler").map(String::as_str),
            Some("onKeyDown")
        );
    }

    #[test]
    fn skips_semantic_elements() {
        assert!(check("<button onClick={go}>Go</button>").is_none());
        assert!(check("<a onClick={go}>Go</a>").is_none());
    }

    #[test]
    fn skips_elements_with_role() {
        assert!(check("<div onClick={go} role=\"button\">Go</div>").is_none());
        // An expression-valued role still counts as a role being present
        assert!(check("<div onClick={go} role={role}>Go</div>").is_none());
    }

    #[test]
    fn skips_non_interactive_divs() {
        assert!(check("<div className=\"box\">x</div>").is_none());
        assert!(check("<div onMouseEnter={show}>x</div>").is_none());
    }

    #[test]
    fn fix_closes_the_match() {
        let source = "<p onClick={go}>x</p>";
        let diagnostic = check(source).unwrap();
        let fixed = apply_edits(source, &[diagnostic]);
        assert!(check(&fixed).is_none());
    }
}
