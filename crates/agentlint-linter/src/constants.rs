//! Shared constant tables. Immutable after initialization; safe to share
//! across concurrent analysis passes.

/// HTML elements that are natively interactive
pub const INTERACTIVE_ELEMENTS: &[&str] = &[
    "button", "a", "input", "select", "textarea", "details", "summary",
];

/// Event handler props that indicate interactivity
pub const INTERACTIVE_HANDLERS: &[&str] = &[
    "onClick",
    "onSubmit",
    "onChange",
    "onKeyDown",
    "onKeyUp",
    "onKeyPress",
    "onDoubleClick",
];

/// Hover-related event handlers
pub const HOVER_HANDLERS: &[&str] = &["onMouseEnter", "onMouseOver", "onMouseLeave", "onMouseOut"];

/// Focus-related event handlers (the accessible alternative to hover)
pub const FOCUS_HANDLERS: &[&str] = &["onFocus", "onBlur"];

/// Attributes that provide stable selectors for agents
pub const STABLE_SELECTOR_ATTRIBUTES: &[&str] = &["data-testid", "data-agent-id", "id"];

/// Elements that carry no interaction semantics of their own
pub const NON_SEMANTIC_ELEMENTS: &[&str] = &["div", "span", "li", "td", "p"];

/// A CSS class token that communicates state, with its ARIA equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssStatePattern {
    pub class_pattern: &'static str,
    pub aria_attribute: &'static str,
    /// The class names an absence: the inserted ARIA value is `"false"`.
    pub inverse: bool,
}

/// CSS class patterns that indicate state, mapped to their ARIA equivalents.
/// Declaration order is the match-priority order.
pub const CSS_STATE_TO_ARIA: &[CssStatePattern] = &[
    CssStatePattern {
        class_pattern: "disabled",
        aria_attribute: "aria-disabled",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "active",
        aria_attribute: "aria-pressed",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "selected",
        aria_attribute: "aria-selected",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "loading",
        aria_attribute: "aria-busy",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "hidden",
        aria_attribute: "aria-hidden",
        inverse: false,
    },
    // collapsed = expanded=false
    CssStatePattern {
        class_pattern: "collapsed",
        aria_attribute: "aria-expanded",
        inverse: true,
    },
    CssStatePattern {
        class_pattern: "expanded",
        aria_attribute: "aria-expanded",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "checked",
        aria_attribute: "aria-checked",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "open",
        aria_attribute: "aria-expanded",
        inverse: false,
    },
    CssStatePattern {
        class_pattern: "closed",
        aria_attribute: "aria-expanded",
        inverse: true,
    },
];

/// `role` values that mark a modal container
pub const MODAL_ROLES: &[&str] = &["dialog", "alertdialog"];

/// Class name fragments that mark a modal container
pub const MODAL_CLASS_PATTERNS: &[&str] = &["modal", "dialog", "overlay", "popup", "lightbox"];

/// The attribute that tells an agent it is inside a dismissable modal
pub const MODAL_INDICATOR_ATTRIBUTE: &str = "aria-modal";
