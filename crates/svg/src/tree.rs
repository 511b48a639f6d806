//! The document tree: node variants and their shape payloads.
//! Spec: <https://www.w3.org/TR/SVG11/struct.html>
//!
//! Shape records are plain data containers; the cascade only ever touches
//! the [`DrawAttributes`] record each node owns. Building the tree from
//! XML, resolving `url(#id)` references, and converting units to pixels
//! all belong to outer layers.

use crate::attributes::DrawAttributes;
use css_selectors::ElementFacts;
use css_values_units::Number;

/// A container node; styling recurses through its children.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    pub attributes: DrawAttributes,
    pub children: Vec<Tree>,
}

/// `<rect>`
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub attributes: DrawAttributes,
    pub x: Number,
    pub y: Number,
    pub width: Number,
    pub height: Number,
    /// Corner radii; `None` means square corners.
    pub corner_radius: Option<(Number, Number)>,
}

/// `<circle>`
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub attributes: DrawAttributes,
    pub center_x: Number,
    pub center_y: Number,
    pub radius: Number,
}

/// `<ellipse>`
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub attributes: DrawAttributes,
    pub center_x: Number,
    pub center_y: Number,
    pub radius_x: Number,
    pub radius_y: Number,
}

/// `<line>`
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub attributes: DrawAttributes,
    pub first: (Number, Number),
    pub second: (Number, Number),
}

/// `<polyline>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub attributes: DrawAttributes,
    pub points: Vec<(f64, f64)>,
}

/// `<polygon>`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub attributes: DrawAttributes,
    pub points: Vec<(f64, f64)>,
}

/// `<path>`; the raw path data is parsed by the renderer, not here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub attributes: DrawAttributes,
    pub definition: String,
}

/// `<text>` with its character content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    pub attributes: DrawAttributes,
    pub content: String,
}

/// One node of the document tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Tree {
    /// An empty node; matches nothing and draws nothing.
    #[default]
    None,
    Group(Group),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
    Path(Path),
    Text(Text),
}

impl Tree {
    /// The node's attribute record, when the variant carries one.
    pub const fn attributes(&self) -> Option<&DrawAttributes> {
        match self {
            Self::None => None,
            Self::Group(group) => Some(&group.attributes),
            Self::Rectangle(rectangle) => Some(&rectangle.attributes),
            Self::Circle(circle) => Some(&circle.attributes),
            Self::Ellipse(ellipse) => Some(&ellipse.attributes),
            Self::Line(line) => Some(&line.attributes),
            Self::Polyline(polyline) => Some(&polyline.attributes),
            Self::Polygon(polygon) => Some(&polygon.attributes),
            Self::Path(path) => Some(&path.attributes),
            Self::Text(text) => Some(&text.attributes),
        }
    }

    /// Mutable access to the node's attribute record.
    pub const fn attributes_mut(&mut self) -> Option<&mut DrawAttributes> {
        match self {
            Self::None => None,
            Self::Group(group) => Some(&mut group.attributes),
            Self::Rectangle(rectangle) => Some(&mut rectangle.attributes),
            Self::Circle(circle) => Some(&mut circle.attributes),
            Self::Ellipse(ellipse) => Some(&mut ellipse.attributes),
            Self::Line(line) => Some(&mut line.attributes),
            Self::Polyline(polyline) => Some(&mut polyline.attributes),
            Self::Polygon(polygon) => Some(&mut polygon.attributes),
            Self::Path(path) => Some(&mut path.attributes),
            Self::Text(text) => Some(&mut text.attributes),
        }
    }
}

impl ElementFacts for Tree {
    fn tag_name(&self) -> &str {
        match self {
            Self::None => "",
            Self::Group(_) => "g",
            Self::Rectangle(_) => "rect",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Line(_) => "line",
            Self::Polyline(_) => "polyline",
            Self::Polygon(_) => "polygon",
            Self::Path(_) => "path",
            Self::Text(_) => "text",
        }
    }

    fn element_id(&self) -> Option<&str> {
        self.attributes()?.id.as_deref()
    }

    fn has_class(&self, class: &str) -> bool {
        self.attributes()
            .is_some_and(|record| record.class.iter().any(|token| token == class))
    }

    // Presentation attributes are not exposed as CSS-matchable attributes
    // in this document model; attribute selectors are inert against it.
    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }

    // No node reports pseudo facts; pseudo-class selectors are inert.
    fn has_pseudo_class(&self, _name: &str) -> bool {
        false
    }
}
