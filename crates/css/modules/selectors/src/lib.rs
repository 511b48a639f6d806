//! Selectors Level 3 — selector model, grammar, and context matching.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This module implements the subset needed for styling a vector document
//! tree:
//! - Type, class, id, pseudo-class, and attribute-equals descriptors
//! - Combinators: descendant, direct child, adjacent sibling
//! - Right-to-left matching against an ancestor/sibling context
//!
//! Specificity is deliberately not scored; the cascade resolves conflicts
//! by source order alone.

#![forbid(unsafe_code)]

mod matcher;
mod parser;

// Re-export public API
pub use matcher::{matches, matches_any};
pub use parser::{parse_selector, parse_selector_list};

/// One modifier on a compound selector.
/// Spec: Section 5, 6, 7, 8
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CssDescriptor {
    /// Spec: Section 7 — ID selectors
    ById(String),
    /// Spec: Section 6 — Class selectors
    ByClass(String),
    /// Spec: Section 6.6 — Pseudo-classes (single-token only)
    ByPseudoClass(String),
    /// Spec: Section 8 — Attribute selectors, equality form only
    ByAttribute {
        name: String,
        value: String,
    },
}

/// The element-name constraint of a compound selector.
/// Spec: Section 5 — Type and universal selectors
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementName {
    /// `*`, or the implicit universal element of a bare modifier chain.
    Any,
    /// A named element; comparison is case-sensitive (XML semantics).
    Named(String),
}

/// One link of a selector chain: a compound, or a combinator marker
/// standing between two compounds.
///
/// A full selector is a `Vec<CssSelector>` alternating compounds and
/// markers; two adjacent compounds with no marker between them relate as
/// descendant-at-any-depth.
/// Spec: Section 3, 11
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CssSelector {
    /// A compound: element-name constraint plus its modifiers.
    AllOf(ElementName, Vec<CssDescriptor>),
    /// `>` marker.
    DirectChild,
    /// `+` marker.
    AdjacentSibling,
}

/// The read-only facts a document node exposes for matching.
///
/// This is the sole contract between the cascade engine and the document
/// tree; implement it for the node type fed into the cascade.
pub trait ElementFacts {
    /// Tag name of the node.
    /// Spec: Section 5 — Type selectors
    fn tag_name(&self) -> &str;

    /// The node's id, when it has one.
    /// Spec: Section 7 — ID selectors
    fn element_id(&self) -> Option<&str>;

    /// True when the node carries the given class token.
    /// Spec: Section 6 — Class selectors
    fn has_class(&self, class: &str) -> bool;

    /// The named attribute's value; a document model may always answer
    /// `None`, making attribute selectors inert rather than erroneous.
    /// Spec: Section 8 — Attribute selectors
    fn attribute(&self, name: &str) -> Option<&str>;

    /// True when the node reports the given pseudo-class fact; a document
    /// model reporting none makes pseudo-class selectors inert.
    /// Spec: Section 6.6 — Pseudo-classes
    fn has_pseudo_class(&self, name: &str) -> bool;
}
