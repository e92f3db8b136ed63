use crate::constants::{MODAL_CLASS_PATTERNS, MODAL_INDICATOR_ATTRIBUTE, MODAL_ROLES};
use crate::diagnostics::{CodeFix, LintDiagnostic, Severity};
use crate::edits;
use crate::predicates::{class_token_contains, has_attribute, role_value};
use crate::traits::{ElementLintRule, LintRule};
use agentlint_syntax::Element;

/// Trait implementation for the `require_modal_dismiss` rule
pub struct RequireModalDismissRuleImpl;

impl LintRule for RequireModalDismissRuleImpl {
    fn name(&self) -> &'static str {
        "require_modal_dismiss"
    }

    fn description(&self) -> &'static str {
        "Modal dialogs must declare aria-modal so agents know they are in a modal and how to leave it"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
}

impl ElementLintRule for RequireModalDismissRuleImpl {
    fn check(
        &self,
        element: &Element,
        _options: Option<&serde_json::Value>,
    ) -> Option<LintDiagnostic> {
        let is_modal_role = role_value(element).is_some_and(|role| MODAL_ROLES.contains(&role));
        let has_modal_class = MODAL_CLASS_PATTERNS
            .iter()
            .any(|pattern| class_token_contains(element, pattern));
        if !is_modal_role && !has_modal_class {
            return None;
        }

        if has_attribute(element, MODAL_INDICATOR_ATTRIBUTE) {
            return None;
        }

        Some(
            LintDiagnostic::new(
                element.span.into(),
                self.default_severity(),
                self.name(),
                "modal_missing_dismiss",
                "Modal/dialog element lacks `aria-modal`. Agents need to know this is a modal \
                 and how to dismiss it. Add `aria-modal=\"true\"` and ensure there is a close \
                 button and Escape key handler.",
            )
            .with_fix(CodeFix::new(
                "Add aria-modal=\"true\"",
                edits::insert_attribute(element, "aria-modal=\"true\""),
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
        RequireModalDismissRuleImpl.check(&parse.roots[0], None)
    }

    #[test]
    fn flags_dialog_role_without_indicator() {
        let source = "<div role=\"dialog\"><button>Close</button></div>";
        let diagnostic = check(source).unwrap();
        let fixed = apply_edits(source, &[diagnostic]);
        assert_eq!(
            fixed,
            "<div role=\"dialog\" aria-modal=\"true\"><button>Close</button></div>"
        );
    }

    #[test]
    fn flags_alertdialog_role() {
        assert!(check("<div role=\"alertdialog\">x</div>").is_some());
    }

    #[test]
    fn flags_modal_class_patterns() {
        assert!(check("<div className=\"modal-backdrop\">x</div>").is_some());
        assert!(check("<div className=\"overlay\">x</div>").is_some());
        assert!(check("<div className=\"image-lightbox\">x</div>").is_some());
    }

    #[test]
    fn skips_when_indicator_present() {
        assert!(check("<div role=\"dialog\" aria-modal=\"true\"><button>Close</button></div>").is_none());
        assert!(check("<div className=\"modal\" aria-modal=\"false\">x</div>").is_none());
    }

    #[test]
    fn skips_non_modal_elements() {
        assert!(check("<div role=\"navigation\">x</div>").is_none());
        assert!(check("<div className=\"panel\">x</div>").is_none());
    }

    #[test]
    fn expression_valued_role_is_unanalyzable() {
        assert!(check("<div role={role}>x</div>").is_none());
    }

    #[test]
    fn fix_closes_the_match() {
        let source = "<div className=\"modal\">x</div>";
        let diagnostic = check(source).unwrap();
        let fixed = apply_edits(source, &[diagnostic]);
        assert!(check(&fixed).is_none());
    }
}
