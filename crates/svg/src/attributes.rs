//! Presentation attributes and their cascade merge rules.
//! Spec: <https://www.w3.org/TR/SVG11/painting.html>

use crate::transform::Transform;
use css_values_units::{Color, Number};
use smallvec::SmallVec;

/// Paint applied to a fill or a stroke.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Texture {
    /// A solid color.
    Solid(Color),
    /// A reference to a paint server element (`url(#name)`).
    Ref(String),
    /// Explicitly no paint.
    None,
}

/// Reference to another element by id, as used by marker properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementRef {
    /// `url(#name)`
    Ref(String),
    /// Explicitly no reference.
    None,
}

/// Shape of an open stroke's endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Shape of a stroke's corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Interior test used when filling self-intersecting shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillRule {
    NonZero,
    EvenOdd,
}

/// Font slant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
    Oblique,
}

/// Horizontal anchoring of a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// The resolved presentation state attached to every tree node.
///
/// Every field is independently optional; unset is the identity for
/// [`DrawAttributes::merge`]. The record is created all-unset at node
/// construction and replaced, never aliased, when the cascade runs.
/// Unset fields are folded upward from ancestors by the renderer at draw
/// time; this engine does not propagate attributes down the tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawAttributes {
    pub stroke_width: Option<Number>,
    pub stroke: Option<Texture>,
    pub stroke_opacity: Option<f64>,
    pub stroke_line_cap: Option<LineCap>,
    pub stroke_line_join: Option<LineJoin>,
    pub stroke_miter_limit: Option<f64>,
    pub stroke_dash_offset: Option<Number>,
    pub stroke_dash_array: Option<Vec<Number>>,
    pub fill: Option<Texture>,
    pub fill_opacity: Option<f64>,
    pub fill_rule: Option<FillRule>,
    /// Transform list; merged wholesale, never element-wise.
    pub transform: Option<Vec<Transform>>,
    /// Class tokens; an empty list means unset.
    pub class: SmallVec<String, 4>,
    pub id: Option<String>,
    pub font_size: Option<Number>,
    pub font_family: Option<Vec<String>>,
    pub font_style: Option<FontStyle>,
    pub text_anchor: Option<TextAnchor>,
    pub marker_start: Option<ElementRef>,
    pub marker_mid: Option<ElementRef>,
    pub marker_end: Option<ElementRef>,
}

impl DrawAttributes {
    /// Merge `overlay` onto `base`, field by field.
    ///
    /// Default rule: a field set in the overlay replaces the base value,
    /// otherwise the base value is kept. Exceptions:
    /// - the opacity fields compound multiplicatively when both sides are
    ///   set;
    /// - a set overlay transform list wholly replaces the base list;
    /// - an overlay without an id never clears the base id.
    pub fn merge(base: Self, overlay: Self) -> Self {
        Self {
            stroke_width: overlay.stroke_width.or(base.stroke_width),
            stroke: overlay.stroke.or(base.stroke),
            stroke_opacity: merge_opacity(base.stroke_opacity, overlay.stroke_opacity),
            stroke_line_cap: overlay.stroke_line_cap.or(base.stroke_line_cap),
            stroke_line_join: overlay.stroke_line_join.or(base.stroke_line_join),
            stroke_miter_limit: overlay.stroke_miter_limit.or(base.stroke_miter_limit),
            stroke_dash_offset: overlay.stroke_dash_offset.or(base.stroke_dash_offset),
            stroke_dash_array: overlay.stroke_dash_array.or(base.stroke_dash_array),
            fill: overlay.fill.or(base.fill),
            fill_opacity: merge_opacity(base.fill_opacity, overlay.fill_opacity),
            fill_rule: overlay.fill_rule.or(base.fill_rule),
            transform: overlay.transform.or(base.transform),
            class: if overlay.class.is_empty() {
                base.class
            } else {
                overlay.class
            },
            id: overlay.id.or(base.id),
            font_size: overlay.font_size.or(base.font_size),
            font_family: overlay.font_family.or(base.font_family),
            font_style: overlay.font_style.or(base.font_style),
            text_anchor: overlay.text_anchor.or(base.text_anchor),
            marker_start: overlay.marker_start.or(base.marker_start),
            marker_mid: overlay.marker_mid.or(base.marker_mid),
            marker_end: overlay.marker_end.or(base.marker_end),
        }
    }
}

/// Opacity fields compound: cascading a translucent value over another
/// multiplies them rather than replacing.
fn merge_opacity(base: Option<f64>, overlay: Option<f64>) -> Option<f64> {
    match (base, overlay) {
        (Some(existing), Some(incoming)) => Some(existing * incoming),
        (Some(existing), None) => Some(existing),
        (None, incoming) => incoming,
    }
}
