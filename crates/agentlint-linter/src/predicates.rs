//! Pure structural predicates over a single markup element.
//!
//! Every function is total and side-effect free: unresolvable input yields
//! the conservative negative answer, never an error. Repeated calls with
//! equal inputs give equal outputs; nothing here caches state.

use agentlint_syntax::{AttrValue, Attribute, Element, Expression};

/// Resolve the element's tag identity (`"button"`, `"Menu.Item"`). Empty
/// string when unresolvable.
#[must_use]
pub fn element_tag(element: &Element) -> String {
    element.tag.resolved()
}

fn find_attribute<'a>(element: &'a Element, name: &str) -> Option<&'a Attribute> {
    element.named_attributes().find(|attr| attr.name == name)
}

/// Exact, case-sensitive attribute presence check.
#[must_use]
pub fn has_attribute(element: &Element, name: &str) -> bool {
    find_attribute(element, name).is_some()
}

/// True when any of `names` is present.
#[must_use]
pub fn has_any_attribute(element: &Element, names: &[&str]) -> bool {
    names.iter().any(|name| has_attribute(element, name))
}

/// The attribute's value, but only when it is a plain string literal.
///
/// Every expression shape yields `None`: an expression-valued attribute is
/// never treated as satisfying a string check.
#[must_use]
pub fn attribute_string_value<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    match find_attribute(element, name)?.value.as_ref()? {
        AttrValue::Literal(value) => Some(value),
        AttrValue::Expression(_) => None,
    }
}

/// True when any attribute name is in `handlers`, regardless of the
/// handler's value shape.
#[must_use]
pub fn has_event_handler(element: &Element, handlers: &[&str]) -> bool {
    element
        .named_attributes()
        .any(|attr| handlers.contains(&attr.name.as_str()))
}

/// Check for a `role` attribute.
#[must_use]
pub fn has_role(element: &Element) -> bool {
    has_attribute(element, "role")
}

/// The `role` attribute value, when it is a string literal.
#[must_use]
pub fn role_value(element: &Element) -> Option<&str> {
    attribute_string_value(element, "role")
}

/// Case-insensitive substring test against the `className` value.
///
/// String literals are searched directly; template values are searched
/// segment by literal segment (interpolations are not inspected). Any other
/// value shape is unanalyzable and yields false.
#[must_use]
pub fn class_token_contains(element: &Element, pattern: &str) -> bool {
    let Some(value) = find_attribute(element, "className").and_then(|attr| attr.value.as_ref())
    else {
        return false;
    };
    let pattern = pattern.to_lowercase();
    match value {
        AttrValue::Literal(class) => class.to_lowercase().contains(&pattern),
        AttrValue::Expression(Expression::Template { quasis, .. }) => quasis
            .iter()
            .any(|quasi| quasi.to_lowercase().contains(&pattern)),
        AttrValue::Expression(Expression::Opaque { .. }) => false,
    }
}
