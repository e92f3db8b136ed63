use std::collections::BTreeMap;

/// Byte offset range in a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OffsetRange {
    pub start: usize,
    pub end: usize,
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl OffsetRange {
    /// Create a new offset range
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a zero-width range at an offset
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }
}

impl From<agentlint_syntax::Span> for OffsetRange {
    fn from(span: agentlint_syntax::Span) -> Self {
        Self {
            start: span.start,
            end: span.end,
        }
    }
}

/// A text edit that fixes a lint issue.
///
/// Fixes only ever insert: `offset_range` is always zero-width, so applying
/// an edit can never rewrite or delete existing text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Byte offset position in the file
    pub offset_range: OffsetRange,
    /// The text to insert at the position
    pub new_text: String,
}

impl TextEdit {
    /// Create an insertion edit (insert text at position)
    #[must_use]
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self {
            offset_range: OffsetRange::at(position),
            new_text: text.into(),
        }
    }
}

/// A code fix that can be applied to resolve a lint diagnostic.
///
/// At most one fix per diagnostic, and a fix is exactly one contiguous
/// insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFix {
    /// Human-readable description of what the fix does
    pub label: String,
    /// The insertion to apply
    pub edit: TextEdit,
}

impl CodeFix {
    /// Create a new code fix
    #[must_use]
    pub fn new(label: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            label: label.into(),
            edit,
        }
    }
}

/// Severity of an emitted diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Lint diagnostic with byte offsets (not line/column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// Span of the triggering element's opening tag
    pub span: OffsetRange,
    /// Severity (from rule default or config override)
    pub severity: Severity,
    /// Rule identifier (e.g. `"require_stable_selector"`)
    pub rule: String,
    /// Rule-scoped message template key
    pub message_id: &'static str,
    /// Interpolation values for the message template, in deterministic order
    pub data: BTreeMap<&'static str, String>,
    /// Rendered human-readable message
    pub message: String,
    /// Optional auto-fix for this diagnostic
    pub fix: Option<CodeFix>,
}

impl LintDiagnostic {
    /// Create a new lint diagnostic
    #[must_use]
    pub fn new(
        span: OffsetRange,
        severity: Severity,
        rule: impl Into<String>,
        message_id: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            span,
            severity,
            rule: rule.into(),
            message_id,
            data: BTreeMap::new(),
            message: message.into(),
            fix: None,
        }
    }

    /// Record an interpolation value for the message template
    #[must_use]
    pub fn with_data(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.data.insert(key, value.into());
        self
    }

    /// Add an auto-fix to this diagnostic
    #[must_use]
    pub fn with_fix(mut self, fix: CodeFix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Returns true if this diagnostic has an auto-fix available
    #[must_use]
    pub const fn has_fix(&self) -> bool {
        self.fix.is_some()
    }
}
