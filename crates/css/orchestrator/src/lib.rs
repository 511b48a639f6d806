//! Public facade of the CSS styling engine.
//!
//! Ties the grammar layers and the cascade together behind three entry
//! points: strict parsing, lenient parsing, and one-call styling of a
//! document tree. A malformed stylesheet never fails a caller; it
//! degrades to "no rules apply", which is always safe for a renderer
//! that still has the explicitly authored attributes.

#![forbid(unsafe_code)]

pub use css_cascade::decode_declaration;
pub use css_selectors::{CssDescriptor, CssSelector, ElementFacts, ElementName};
pub use css_syntax::{CssDeclaration, CssRule, Stylesheet};
pub use css_values_units::{
    Color, CssElement, Number, ParseError, Unit, parse_dash_pattern, parse_number,
    parse_number_list,
};
pub use svg::{DrawAttributes, Tree};

/// Parse a stylesheet strictly.
///
/// # Errors
/// Returns the location-tagged [`ParseError`] of the first failure; no
/// partial rule list is ever produced.
pub fn parse_stylesheet(text: &str) -> Result<Stylesheet, ParseError> {
    css_syntax::parse_stylesheet(text)
}

/// Parse a stylesheet leniently: a malformed stylesheet yields an empty
/// rule list (logged at warn level) instead of an error.
pub fn stylesheet_or_empty(text: &str) -> Stylesheet {
    css_syntax::parse_stylesheet(text).unwrap_or_else(|error| {
        log::warn!("stylesheet discarded, no rules will apply: {error}");
        Stylesheet::default()
    })
}

/// Apply a stylesheet to a document tree.
///
/// See [`css_cascade::apply`] for the cascade semantics.
pub fn apply(stylesheet: &Stylesheet, tree: &Tree) -> Tree {
    css_cascade::apply(stylesheet, tree)
}

/// Parse `css` leniently and cascade it onto `tree` in one call.
pub fn apply_css(css: &str, tree: &Tree) -> Tree {
    let stylesheet = stylesheet_or_empty(css);
    if stylesheet.rules.is_empty() {
        return tree.clone();
    }
    apply(&stylesheet, tree)
}
