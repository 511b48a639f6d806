//! The cascade engine: match rules per node and merge the result.
//! Spec: <https://www.w3.org/TR/SVG11/styling.html#StylingWithCSS>
//!
//! Conflict resolution is source order only: declarations from every
//! matching rule are concatenated in stylesheet order and the last
//! decoded value per field wins, then the freshly built record is merged
//! onto the node's existing record with the per-field table in
//! [`DrawAttributes::merge`]. Attribute inheritance down the tree is a
//! renderer-time concern and is not performed here.

#![forbid(unsafe_code)]

use css_selectors::matches_any;
use css_syntax::Stylesheet;
use svg::{DrawAttributes, Tree, zip_tree};

mod decode;

pub use decode::decode_declaration;

/// Apply a stylesheet to a document tree, returning the restyled tree.
///
/// Each node's attribute record is replaced by the merge of the cascade
/// result over its previous record; children are processed independently
/// and nodes no rule matches are structurally unchanged.
pub fn apply(stylesheet: &Stylesheet, tree: &Tree) -> Tree {
    let mut rewrite =
        |node: &Tree, context: &[Vec<Tree>]| restyle_node(stylesheet, node, context);
    zip_tree(&mut rewrite, tree)
}

/// Cascade one node: decode matching declarations in stylesheet order,
/// then merge onto the node's record.
fn restyle_node(stylesheet: &Stylesheet, node: &Tree, context: &[Vec<Tree>]) -> Tree {
    let mut styled = node.clone();
    let Some(record) = styled.attributes_mut() else {
        return styled;
    };
    let mut incoming = DrawAttributes::default();
    for rule in &stylesheet.rules {
        if !matches_any(&rule.selectors, context) {
            continue;
        }
        for declaration in &rule.declarations {
            if !decode::decode_declaration(&mut incoming, declaration) {
                log::debug!("ignoring unknown property '{}'", declaration.property);
            }
        }
    }
    *record = DrawAttributes::merge(record.clone(), incoming);
    styled
}
