mod config;
pub mod constants;
mod diagnostics;
mod edits;
mod linter;
pub mod predicates;
mod registry;
mod rules;
mod traits;

pub use config::{ExtendsConfig, FullLintConfig, LintConfig, LintRuleConfig, LintSeverity};
pub use diagnostics::{CodeFix, LintDiagnostic, OffsetRange, Severity, TextEdit};
pub use edits::{apply_edits, insert_attribute, insertion_anchor};
pub use linter::Linter;
pub use registry::{all_rule_names, element_rules, guarded_element_rules};
pub use rules::StableSelectorOptions;
pub use traits::{ElementLintRule, GuardedElementLintRule, LintRule};

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types for working with
/// the linter. Import with:
///
/// ```rust,ignore
/// use agentlint_linter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{LintConfig, LintSeverity};
    pub use crate::diagnostics::{LintDiagnostic, Severity};
    pub use crate::linter::Linter;
    pub use crate::traits::{ElementLintRule, GuardedElementLintRule, LintRule};
}
