//! Selector matching against an ancestor/sibling context.
//! Spec: <https://www.w3.org/TR/selectors-3/#Conformance>
//!
//! The context is the list of levels from the root down to the node:
//! each level holds, in document order, the already-visited preceding
//! siblings at that depth followed by the node on the ancestor path; the
//! last level ends with the node being matched itself.

use crate::{CssDescriptor, CssSelector, ElementFacts, ElementName};

/// How the next compound to the left relates to the current position.
#[derive(Clone, Copy)]
enum Step {
    /// `>` — the immediate parent level.
    Child,
    /// `+` — the immediately preceding entry at the current level.
    Sibling,
    /// No marker — some ancestor level, nearest first.
    Descendant,
}

/// Match one full selector chain against a node's context.
/// Spec: Section 3, 11 — Right-to-left matching strategy
///
/// The rightmost compound must match the node itself (the last entry of
/// the last level). Walking leftward, each combinator determines where
/// the next compound must match. Descendant steps take the nearest
/// matching ancestor and never backtrack to try a farther one.
pub fn matches<Element: ElementFacts>(
    selector: &[CssSelector],
    context: &[Vec<Element>],
) -> bool {
    let Some(mut level) = context.len().checked_sub(1) else {
        return false;
    };
    let Some(mut index) = context.get(level).map(Vec::len).and_then(|len| len.checked_sub(1))
    else {
        return false;
    };

    let mut parts = selector.iter().rev();
    let Some(CssSelector::AllOf(name, descriptors)) = parts.next() else {
        return false;
    };
    let Some(entry) = context.get(level).and_then(|entries| entries.get(index)) else {
        return false;
    };
    if !compound_matches(entry, name, descriptors) {
        return false;
    }

    let mut step = Step::Descendant;
    for part in parts {
        match part {
            CssSelector::DirectChild => step = Step::Child,
            CssSelector::AdjacentSibling => step = Step::Sibling,
            CssSelector::AllOf(next_name, next_descriptors) => {
                let moved = match step {
                    Step::Child => move_to_parent(context, &mut level, &mut index),
                    Step::Sibling => move_to_preceding_sibling(&mut index),
                    Step::Descendant => {
                        move_to_matching_ancestor(
                            context,
                            &mut level,
                            &mut index,
                            next_name,
                            next_descriptors,
                        )
                    }
                };
                if !moved {
                    return false;
                }
                // Descendant movement already matched during the search.
                if !matches!(step, Step::Descendant) {
                    let Some(target) =
                        context.get(level).and_then(|entries| entries.get(index))
                    else {
                        return false;
                    };
                    if !compound_matches(target, next_name, next_descriptors) {
                        return false;
                    }
                }
                step = Step::Descendant;
            }
        }
    }
    true
}

/// Match a selector list (comma alternatives) against a node's context.
/// Spec: Section 4 — any alternative matching counts
pub fn matches_any<Element: ElementFacts>(
    selectors: &[Vec<CssSelector>],
    context: &[Vec<Element>],
) -> bool {
    selectors
        .iter()
        .any(|selector| matches(selector, context))
}

/// Step to the on-path node of the immediate parent level.
fn move_to_parent<Element>(
    context: &[Vec<Element>],
    level: &mut usize,
    index: &mut usize,
) -> bool {
    let Some(parent_level) = level.checked_sub(1) else {
        return false;
    };
    let Some(last) = context
        .get(parent_level)
        .map(Vec::len)
        .and_then(|len| len.checked_sub(1))
    else {
        return false;
    };
    *level = parent_level;
    *index = last;
    true
}

/// Step to the immediately preceding entry at the current level.
fn move_to_preceding_sibling(index: &mut usize) -> bool {
    let Some(previous) = index.checked_sub(1) else {
        return false;
    };
    *index = previous;
    true
}

/// Walk ancestor levels nearest-to-farthest and stop at the first whose
/// on-path node matches the compound. No backtracking once taken.
fn move_to_matching_ancestor<Element: ElementFacts>(
    context: &[Vec<Element>],
    level: &mut usize,
    index: &mut usize,
    name: &ElementName,
    descriptors: &[CssDescriptor],
) -> bool {
    let mut probe = *level;
    while let Some(ancestor_level) = probe.checked_sub(1) {
        probe = ancestor_level;
        let Some(entries) = context.get(probe) else {
            return false;
        };
        let Some(last) = entries.len().checked_sub(1) else {
            continue;
        };
        if entries
            .get(last)
            .is_some_and(|entry| compound_matches(entry, name, descriptors))
        {
            *level = probe;
            *index = last;
            return true;
        }
    }
    false
}

/// Match one compound against one element's facts.
/// Spec: Section 5-8
fn compound_matches<Element: ElementFacts>(
    entry: &Element,
    name: &ElementName,
    descriptors: &[CssDescriptor],
) -> bool {
    match name {
        ElementName::Any => {}
        ElementName::Named(expected) => {
            if entry.tag_name() != expected {
                return false;
            }
        }
    }
    descriptors
        .iter()
        .all(|descriptor| descriptor_matches(entry, descriptor))
}

/// Match one descriptor against one element's facts.
fn descriptor_matches<Element: ElementFacts>(entry: &Element, descriptor: &CssDescriptor) -> bool {
    match descriptor {
        CssDescriptor::ById(id) => entry.element_id().is_some_and(|value| value == id),
        CssDescriptor::ByClass(class) => entry.has_class(class),
        CssDescriptor::ByPseudoClass(name) => entry.has_pseudo_class(name),
        CssDescriptor::ByAttribute { name, value } => entry
            .attribute(name)
            .is_some_and(|actual| actual == value),
    }
}
