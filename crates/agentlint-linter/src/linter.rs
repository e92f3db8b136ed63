use crate::config::{LintConfig, LintSeverity};
use crate::diagnostics::{LintDiagnostic, Severity};
use crate::registry;
use agentlint_syntax::Parse;

/// Linter that runs configured lint rules over parsed markup.
///
/// One traversal per pass: each element is visited exactly once, every
/// enabled rule runs to completion on it before the next element is
/// considered, and no state is shared across rules or elements.
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    /// Create a new linter with the given configuration
    #[must_use]
    pub const fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Lint a source file.
    ///
    /// Parsing is tolerant: when the file has errors, the elements that did
    /// parse are still checked rather than aborting the pass.
    #[must_use]
    #[tracing::instrument(skip(self, source), fields(file = file_name))]
    pub fn lint_source(&self, source: &str, file_name: &str) -> Vec<LintDiagnostic> {
        let parse = agentlint_syntax::parse(source);
        if parse.has_errors() {
            tracing::debug!(
                errors = parse.errors.len(),
                "Source has parse errors; linting parsed elements only"
            );
        }
        self.lint_parse(&parse)
    }

    /// Lint an already-parsed tree.
    #[must_use]
    pub fn lint_parse(&self, parse: &Parse) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        // Rules are opt-in: anything the config leaves off never runs
        let element_rules: Vec<_> = registry::element_rules()
            .into_iter()
            .filter(|rule| self.config.is_enabled(rule.name()))
            .collect();
        let guarded_rules: Vec<_> = registry::guarded_element_rules()
            .into_iter()
            .filter(|rule| self.config.is_enabled(rule.name()))
            .collect();
        tracing::debug!(
            element_rules = element_rules.len(),
            guarded_rules = guarded_rules.len(),
            "Running lint rules"
        );

        for element in parse.all_elements() {
            for rule in &element_rules {
                let options = self.config.get_options(rule.name());
                if let Some(mut diagnostic) = rule.check(element, options) {
                    self.apply_severity(&mut diagnostic, rule.name());
                    diagnostics.push(diagnostic);
                }
            }
            if element.guarded {
                for rule in &guarded_rules {
                    if let Some(mut diagnostic) = rule.check(element) {
                        self.apply_severity(&mut diagnostic, rule.name());
                        diagnostics.push(diagnostic);
                    }
                }
            }
        }

        tracing::debug!(total = diagnostics.len(), "Linting complete");
        diagnostics
    }

    /// Override the diagnostic's severity with the configured one
    fn apply_severity(&self, diagnostic: &mut LintDiagnostic, rule_name: &str) {
        match self.config.get_severity(rule_name) {
            Some(LintSeverity::Error) => diagnostic.severity = Severity::Error,
            Some(LintSeverity::Warn) => diagnostic.severity = Severity::Warning,
            // Off rules are filtered before dispatch; None keeps the default
            Some(LintSeverity::Off) | None => {}
        }
    }
}
