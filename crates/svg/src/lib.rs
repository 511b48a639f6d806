//! SVG document tree model and presentation attributes.
//! Spec: <https://www.w3.org/TR/SVG11/>
//!
//! The tree here is a persistent value tree: styling produces a new tree
//! rather than mutating in place. Leaf shape records are plain data
//! containers; all resolved presentation state lives in the
//! [`DrawAttributes`] record every node owns. The cascade engine writes
//! those records through [`zip_tree`], which threads each node's
//! ancestor/sibling context for selector matching.

#![forbid(unsafe_code)]

pub mod attributes;
pub mod transform;
pub mod tree;
pub mod zip;

// Re-exports for ergonomic access from other crates.
pub use attributes::{
    DrawAttributes, ElementRef, FillRule, FontStyle, LineCap, LineJoin, TextAnchor, Texture,
};
pub use transform::{Transform, transforms_text};
pub use tree::{
    Circle, Ellipse, Group, Line, Path, Polygon, Polyline, Rectangle, Text, Tree,
};
pub use zip::zip_tree;
