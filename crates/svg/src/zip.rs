//! Context-threading tree rewriting.
//!
//! [`zip_tree`] walks the tree top-down, handing every node to a rewrite
//! function together with its ancestor/sibling context, and rebuilds the
//! tree bottom-up from the returned nodes. Nothing is mutated in place.
//!
//! The context is a list of levels from the root down to the node. Each
//! level holds, in document order, the already-rewritten preceding
//! siblings at that depth followed by the node on the ancestor path; the
//! last level ends with the node itself. Context entries never carry
//! group children (matching consults element facts only, never structure
//! below an entry), which keeps deep trees from cloning quadratically.

use crate::tree::{Group, Tree};
use core::mem::take;

/// Rewrite every node of `root` with its context.
///
/// The rewrite function receives the full node and the context described
/// in the module docs. Ancestor entries reflect the tree before
/// rewriting; preceding-sibling entries reflect the siblings already
/// rewritten at that level.
pub fn zip_tree<Rewrite>(rewrite: &mut Rewrite, root: &Tree) -> Tree
where
    Rewrite: FnMut(&Tree, &[Vec<Tree>]) -> Tree,
{
    let mut levels = vec![vec![prune(root)]];
    dig(rewrite, &mut levels, root)
}

/// Rewrite `node`, whose pruned copy is already the last entry of the
/// last level, then recurse through group children.
fn dig<Rewrite>(rewrite: &mut Rewrite, levels: &mut Vec<Vec<Tree>>, node: &Tree) -> Tree
where
    Rewrite: FnMut(&Tree, &[Vec<Tree>]) -> Tree,
{
    let rewritten = rewrite(node, levels);
    match rewritten {
        Tree::Group(group) => Tree::Group(rebuild_children(rewrite, levels, group)),
        Tree::None
        | Tree::Rectangle(_)
        | Tree::Circle(_)
        | Tree::Ellipse(_)
        | Tree::Line(_)
        | Tree::Polyline(_)
        | Tree::Polygon(_)
        | Tree::Path(_)
        | Tree::Text(_) => rewritten,
    }
}

/// Rewrite a group's children on a fresh context level.
fn rebuild_children<Rewrite>(
    rewrite: &mut Rewrite,
    levels: &mut Vec<Vec<Tree>>,
    mut group: Group,
) -> Group
where
    Rewrite: FnMut(&Tree, &[Vec<Tree>]) -> Tree,
{
    let children = take(&mut group.children);
    levels.push(Vec::new());
    let mut rebuilt = Vec::with_capacity(children.len());
    for child in &children {
        if let Some(level) = levels.last_mut() {
            level.push(prune(child));
        }
        let new_child = dig(rewrite, levels, child);
        if let Some(level) = levels.last_mut() {
            // The placeholder becomes a preceding sibling for the next
            // child, reflecting its rewritten state.
            level.pop();
            level.push(prune(&new_child));
        }
        rebuilt.push(new_child);
    }
    levels.pop();
    group.children = rebuilt;
    group
}

/// Clone a node for use as a context entry, dropping group children.
fn prune(node: &Tree) -> Tree {
    if let Tree::Group(group) = node {
        return Tree::Group(Group {
            attributes: group.attributes.clone(),
            children: Vec::new(),
        });
    }
    node.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::DrawAttributes;
    use crate::tree::{Circle, Rectangle};
    use css_selectors::ElementFacts as _;
    use css_values_units::Number;

    fn rect() -> Tree {
        Tree::Rectangle(Rectangle {
            attributes: DrawAttributes::default(),
            x: Number::absolute(0.0),
            y: Number::absolute(0.0),
            width: Number::absolute(1.0),
            height: Number::absolute(1.0),
            corner_radius: None,
        })
    }

    fn circle() -> Tree {
        Tree::Circle(Circle {
            attributes: DrawAttributes::default(),
            center_x: Number::absolute(0.0),
            center_y: Number::absolute(0.0),
            radius: Number::absolute(1.0),
        })
    }

    fn group(children: Vec<Tree>) -> Tree {
        Tree::Group(Group {
            attributes: DrawAttributes::default(),
            children,
        })
    }

    /// Test every node is visited with the expected context shape.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_context_shape() {
        let tree = group(vec![rect(), group(vec![circle()])]);
        let mut seen: Vec<(String, usize, usize)> = Vec::new();
        let mut record = |node: &Tree, context: &[Vec<Tree>]| {
            let sibling_count = context
                .last()
                .map_or(0, |level| level.len().saturating_sub(1));
            seen.push((node.tag_name().to_owned(), context.len(), sibling_count));
            node.clone()
        };
        let rebuilt = zip_tree(&mut record, &tree);
        assert_eq!(rebuilt, tree);
        let expected = vec![
            ("g".to_owned(), 1, 0),
            ("rect".to_owned(), 2, 0),
            ("g".to_owned(), 2, 1),
            ("circle".to_owned(), 3, 0),
        ];
        assert_eq!(seen, expected);
    }

    /// Test preceding siblings appear in document order, already
    /// rewritten.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_sibling_visibility() {
        let tree = group(vec![rect(), circle(), rect()]);
        let mut sibling_tags: Vec<Vec<String>> = Vec::new();
        let mut record = |node: &Tree, context: &[Vec<Tree>]| {
            if !matches!(node, Tree::Group(_)) {
                let level_tags: Vec<String> = context.last().map_or_else(Vec::new, |level| {
                    level
                        .iter()
                        .map(|entry| entry.tag_name().to_owned())
                        .collect()
                });
                sibling_tags.push(level_tags);
            }
            node.clone()
        };
        let _rebuilt = zip_tree(&mut record, &tree);
        let expected = vec![
            vec!["rect".to_owned()],
            vec!["rect".to_owned(), "circle".to_owned()],
            vec!["rect".to_owned(), "circle".to_owned(), "rect".to_owned()],
        ];
        assert_eq!(sibling_tags, expected);
    }

    /// Test a rewrite that changes a node leaves untouched nodes equal.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_rewrite_is_persistent() {
        let tree = group(vec![rect(), circle()]);
        let mut drop_circles = |node: &Tree, _context: &[Vec<Tree>]| {
            if matches!(node, Tree::Circle(_)) {
                Tree::None
            } else {
                node.clone()
            }
        };
        let rebuilt = zip_tree(&mut drop_circles, &tree);
        let expected = group(vec![rect(), Tree::None]);
        assert_eq!(rebuilt, expected);
        // The input tree is untouched.
        assert!(matches!(tree, Tree::Group(_)));
    }
}
