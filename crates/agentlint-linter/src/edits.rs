//! Shared edit construction and application.
//!
//! Every fix is a single attribute-syntax fragment inserted after the last
//! attribute entry, or after the tag name when the element has none. Rules
//! decide *whether* an edit is safe (their exclusion conditions prevent
//! duplicate attributes); this module decides *where* and *how* the text is
//! spliced.

use crate::diagnostics::{LintDiagnostic, TextEdit};
use agentlint_syntax::Element;

/// Byte offset at which a generated attribute fragment is spliced in: the
/// end of the last attribute entry, or the end of the tag-name token when
/// the element has no attributes.
#[must_use]
pub fn insertion_anchor(element: &Element) -> usize {
    element
        .attributes
        .last()
        .map_or(element.name_span.end, |entry| entry.span().end)
}

/// Build the insertion for an attribute-syntax `fragment` such as
/// `data-agent-id="button"`. The single leading space is added here so that
/// no rule can get it wrong.
#[must_use]
pub fn insert_attribute(element: &Element, fragment: &str) -> TextEdit {
    TextEdit::insert(insertion_anchor(element), format!(" {fragment}"))
}

/// Apply every available fix in `diagnostics` to `source`.
///
/// Edits are stable-sorted ascending by anchor and applied back to front:
/// later edits cannot shift earlier anchors, and edits sharing one anchor
/// land in rule-declaration order. Out-of-bounds anchors are skipped, not
/// fatal.
#[must_use]
pub fn apply_edits(source: &str, diagnostics: &[LintDiagnostic]) -> String {
    let mut edits: Vec<&TextEdit> = diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fix.as_ref())
        .map(|fix| &fix.edit)
        .collect();
    edits.sort_by_key(|edit| edit.offset_range.start);

    let mut result = source.to_string();
    for edit in edits.iter().rev() {
        let at = edit.offset_range.start;
        if at > result.len() || !result.is_char_boundary(at) {
            tracing::warn!(offset = at, len = result.len(), "Edit anchor out of bounds, skipping");
            continue;
        }
        result.insert_str(at, &edit.new_text);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CodeFix, OffsetRange, Severity};
    use agentlint_syntax::parse;

    fn element(source: &str) -> Element {
        parse(source).roots.into_iter().next().unwrap()
    }

    fn diagnostic_with_edit(rule: &str, edit: TextEdit) -> LintDiagnostic {
        LintDiagnostic::new(OffsetRange::at(0), Severity::Warning, rule, "test", "test")
            .with_fix(CodeFix::new("test fix", edit))
    }

    #[test]
    fn anchor_is_end_of_last_attribute() {
        let source = "<form onSubmit={handleSubmit}>x</form>";
        let el = element(source);
        assert_eq!(insertion_anchor(&el), source.find('>').unwrap());
    }

    #[test]
    fn anchor_is_tag_name_end_without_attributes() {
        let el = element("<button>Submit</button>");
        assert_eq!(insertion_anchor(&el), "<button".len());
    }

    #[test]
    fn insert_attribute_adds_single_leading_space() {
        let el = element("<button>Submit</button>");
        let edit = insert_attribute(&el, "data-agent-id=\"button\"");
        assert_eq!(edit.new_text, " data-agent-id=\"button\"");
        assert_eq!(edit.offset_range.start, "<button".len());
    }

    #[test]
    fn same_anchor_edits_apply_in_declaration_order() {
        let source = "<form>x</form>";
        let anchor = "<form".len();
        let diagnostics = vec![
            diagnostic_with_edit("first", TextEdit::insert(anchor, " a=\"1\"")),
            diagnostic_with_edit("second", TextEdit::insert(anchor, " b=\"2\"")),
        ];
        assert_eq!(
            apply_edits(source, &diagnostics),
            "<form a=\"1\" b=\"2\">x</form>"
        );
    }

    #[test]
    fn distinct_anchors_do_not_shift_each_other() {
        let source = "<div>a</div><div>b</div>";
        let diagnostics = vec![
            diagnostic_with_edit("x", TextEdit::insert(4, " id=\"a\"")),
            diagnostic_with_edit("y", TextEdit::insert(16, " id=\"b\"")),
        ];
        assert_eq!(
            apply_edits(source, &diagnostics),
            "<div id=\"a\">a</div><div id=\"b\">b</div>"
        );
    }

    #[test]
    fn out_of_bounds_anchor_is_skipped() {
        let diagnostics = vec![diagnostic_with_edit("x", TextEdit::insert(999, " nope"))];
        assert_eq!(apply_edits("<div/>", &diagnostics), "<div/>");
    }
}
