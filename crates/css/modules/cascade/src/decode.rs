//! Property decoders from value terms into attribute fields.
//! Spec: <https://www.w3.org/TR/SVG11/styling.html#SVGStylingProperties>
//!
//! Decoding is tolerant: a value that does not fit a known property's
//! grammar leaves the field untouched, and an unknown property name is
//! reported to the caller rather than treated as an error.

use css_syntax::CssDeclaration;
use css_values_units::{CssElement, Number, Unit};
use svg::{
    DrawAttributes, ElementRef, FillRule, FontStyle, LineCap, LineJoin, TextAnchor, Texture,
    Transform,
};

/// Decode one declaration into `record`.
///
/// Returns false when the property name is not part of the decode table,
/// so the caller can report it; the record is untouched in that case.
pub fn decode_declaration(record: &mut DrawAttributes, declaration: &CssDeclaration) -> bool {
    let property = declaration.property.as_str();
    let values = declaration.values.as_slice();
    decode_paint(record, property, values)
        || decode_stroke_geometry(record, property, values)
        || decode_font_text(record, property, values)
        || decode_marker_transform(record, property, values)
}

/// Paint family: `fill`, `stroke`, the opacity pair, and `fill-rule`.
fn decode_paint(record: &mut DrawAttributes, property: &str, values: &[CssElement]) -> bool {
    match property {
        "fill" => {
            if let Some(paint) = texture(values) {
                record.fill = Some(paint);
            }
        }
        "stroke" => {
            if let Some(paint) = texture(values) {
                record.stroke = Some(paint);
            }
        }
        "fill-opacity" => {
            if let Some(value) = opacity(values) {
                record.fill_opacity = Some(value);
            }
        }
        "stroke-opacity" => {
            if let Some(value) = opacity(values) {
                record.stroke_opacity = Some(value);
            }
        }
        "fill-rule" => {
            record.fill_rule = match keyword(values) {
                Some("nonzero") => Some(FillRule::NonZero),
                Some("evenodd") => Some(FillRule::EvenOdd),
                _ => record.fill_rule,
            };
        }
        _ => return false,
    }
    true
}

/// Stroke geometry family: width, caps, joins, miter limit, dashing.
fn decode_stroke_geometry(
    record: &mut DrawAttributes,
    property: &str,
    values: &[CssElement],
) -> bool {
    match property {
        "stroke-width" => {
            if let Some(width) = single_number(values) {
                record.stroke_width = Some(width);
            }
        }
        "stroke-linecap" => {
            record.stroke_line_cap = match keyword(values) {
                Some("butt") => Some(LineCap::Butt),
                Some("round") => Some(LineCap::Round),
                Some("square") => Some(LineCap::Square),
                _ => record.stroke_line_cap,
            };
        }
        "stroke-linejoin" => {
            record.stroke_line_join = match keyword(values) {
                Some("miter") => Some(LineJoin::Miter),
                Some("round") => Some(LineJoin::Round),
                Some("bevel") => Some(LineJoin::Bevel),
                _ => record.stroke_line_join,
            };
        }
        "stroke-miterlimit" => {
            if let Some(limit) = single_number(values) {
                record.stroke_miter_limit = Some(limit.value);
            }
        }
        "stroke-dashoffset" => {
            if let Some(offset) = single_number(values) {
                record.stroke_dash_offset = Some(offset);
            }
        }
        "stroke-dasharray" => {
            if is_none_keyword(values) {
                record.stroke_dash_array = None;
            } else if let Some(dashes) = number_list(values) {
                record.stroke_dash_array = Some(dashes);
            }
        }
        _ => return false,
    }
    true
}

/// Typography family: font size, family list, style, and text anchoring.
fn decode_font_text(record: &mut DrawAttributes, property: &str, values: &[CssElement]) -> bool {
    match property {
        "font-size" => {
            if let Some(size) = single_number(values) {
                record.font_size = Some(size);
            }
        }
        "font-family" => {
            if let Some(families) = font_family(values) {
                record.font_family = Some(families);
            }
        }
        "font-style" => {
            record.font_style = match keyword(values) {
                Some("normal") => Some(FontStyle::Normal),
                Some("italic") => Some(FontStyle::Italic),
                Some("oblique") => Some(FontStyle::Oblique),
                _ => record.font_style,
            };
        }
        "text-anchor" => {
            record.text_anchor = match keyword(values) {
                Some("start") => Some(TextAnchor::Start),
                Some("middle") => Some(TextAnchor::Middle),
                Some("end") => Some(TextAnchor::End),
                _ => record.text_anchor,
            };
        }
        _ => return false,
    }
    true
}

/// Marker references and the transform list.
fn decode_marker_transform(
    record: &mut DrawAttributes,
    property: &str,
    values: &[CssElement],
) -> bool {
    match property {
        "marker-start" => {
            if let Some(marker) = element_ref(values) {
                record.marker_start = Some(marker);
            }
        }
        "marker-mid" => {
            if let Some(marker) = element_ref(values) {
                record.marker_mid = Some(marker);
            }
        }
        "marker-end" => {
            if let Some(marker) = element_ref(values) {
                record.marker_end = Some(marker);
            }
        }
        "transform" => {
            if let Some(transforms) = transform_list(values) {
                record.transform = Some(transforms);
            }
        }
        _ => return false,
    }
    true
}

/// `fill`/`stroke` paint: a color term, `none`, or `url(#name)`.
fn texture(values: &[CssElement]) -> Option<Texture> {
    match values.first()? {
        CssElement::Color(color) => Some(Texture::Solid(*color)),
        CssElement::Ident(name) if name == "none" => Some(Texture::None),
        CssElement::Function(name, arguments) if name == "url" => reference_argument(arguments)
            .map(|target| Texture::Ref(target.to_owned())),
        _ => None,
    }
}

/// Marker reference: `none` or `url(#name)`.
fn element_ref(values: &[CssElement]) -> Option<ElementRef> {
    match values.first()? {
        CssElement::Ident(name) if name == "none" => Some(ElementRef::None),
        CssElement::Function(name, arguments) if name == "url" => reference_argument(arguments)
            .map(|target| ElementRef::Ref(target.to_owned())),
        _ => None,
    }
}

/// The `#name` argument of a `url()` call.
fn reference_argument(arguments: &[CssElement]) -> Option<&str> {
    match arguments.first()? {
        CssElement::Reference(target) => Some(target),
        CssElement::Number(_)
        | CssElement::Color(_)
        | CssElement::String(_)
        | CssElement::Ident(_)
        | CssElement::Function(..)
        | CssElement::Comma
        | CssElement::Slash => None,
    }
}

/// Opacity: a plain number, or a percentage scaled to a fraction;
/// clamped to [0, 1].
fn opacity(values: &[CssElement]) -> Option<f64> {
    let number = single_number(values)?;
    let fraction = match number.unit {
        Unit::Percent => number.value / 100.0,
        Unit::Absolute
        | Unit::Em
        | Unit::Pixel
        | Unit::Point
        | Unit::Pica
        | Unit::Millimeter
        | Unit::Centimeter
        | Unit::Inch => number.value,
    };
    Some(fraction.clamp(0.0, 1.0))
}

/// A single unit-tagged number.
fn single_number(values: &[CssElement]) -> Option<Number> {
    match values.first()? {
        CssElement::Number(number) => Some(*number),
        CssElement::Color(_)
        | CssElement::String(_)
        | CssElement::Ident(_)
        | CssElement::Function(..)
        | CssElement::Reference(_)
        | CssElement::Comma
        | CssElement::Slash => None,
    }
}

/// A single bare keyword.
fn keyword(values: &[CssElement]) -> Option<&str> {
    match values.first()? {
        CssElement::Ident(name) => Some(name),
        CssElement::Number(_)
        | CssElement::Color(_)
        | CssElement::String(_)
        | CssElement::Function(..)
        | CssElement::Reference(_)
        | CssElement::Comma
        | CssElement::Slash => None,
    }
}

/// True when the value is exactly the `none` keyword.
fn is_none_keyword(values: &[CssElement]) -> bool {
    keyword(values) == Some("none")
}

/// One or more numbers with optional comma operators between them.
fn number_list(values: &[CssElement]) -> Option<Vec<Number>> {
    let mut numbers = Vec::new();
    for value in values {
        match value {
            CssElement::Number(number) => numbers.push(*number),
            CssElement::Comma => {}
            CssElement::Color(_)
            | CssElement::String(_)
            | CssElement::Ident(_)
            | CssElement::Function(..)
            | CssElement::Reference(_)
            | CssElement::Slash => return None,
        }
    }
    if numbers.is_empty() {
        return None;
    }
    Some(numbers)
}

/// Comma-separated family names; consecutive bare identifiers form one
/// space-joined name (`Times New Roman`).
fn font_family(values: &[CssElement]) -> Option<Vec<String>> {
    let mut families = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for value in values {
        match value {
            CssElement::Ident(name) | CssElement::String(name) => current.push(name),
            CssElement::Comma => {
                if !current.is_empty() {
                    families.push(current.join(" "));
                    current.clear();
                }
            }
            CssElement::Number(_)
            | CssElement::Color(_)
            | CssElement::Function(..)
            | CssElement::Reference(_)
            | CssElement::Slash => return None,
        }
    }
    if !current.is_empty() {
        families.push(current.join(" "));
    }
    if families.is_empty() {
        return None;
    }
    Some(families)
}

/// A sequence of transform function calls.
fn transform_list(values: &[CssElement]) -> Option<Vec<Transform>> {
    let mut transforms = Vec::new();
    for value in values {
        match value {
            CssElement::Function(name, arguments) => {
                transforms.push(transform_entry(name, arguments)?);
            }
            CssElement::Comma => {}
            CssElement::Number(_)
            | CssElement::Color(_)
            | CssElement::String(_)
            | CssElement::Ident(_)
            | CssElement::Reference(_)
            | CssElement::Slash => return None,
        }
    }
    if transforms.is_empty() {
        return None;
    }
    Some(transforms)
}

/// Decode one transform function by name and arity.
fn transform_entry(name: &str, arguments: &[CssElement]) -> Option<Transform> {
    let numbers: Vec<f64> = arguments
        .iter()
        .filter_map(|argument| {
            if let CssElement::Number(number) = argument {
                return Some(number.value);
            }
            None
        })
        .collect();
    if numbers.len() != arguments.len() {
        return None;
    }
    match (name, numbers.as_slice()) {
        ("translate", [tx]) => Some(Transform::Translate(*tx, 0.0)),
        ("translate", [tx, ty]) => Some(Transform::Translate(*tx, *ty)),
        ("scale", [scale]) => Some(Transform::Scale(*scale, *scale)),
        ("scale", [sx, sy]) => Some(Transform::Scale(*sx, *sy)),
        ("rotate", [angle]) => Some(Transform::Rotate(*angle, None)),
        ("rotate", [angle, cx, cy]) => Some(Transform::Rotate(*angle, Some((*cx, *cy)))),
        ("skewX", [angle]) => Some(Transform::SkewX(*angle)),
        ("skewY", [angle]) => Some(Transform::SkewY(*angle)),
        ("matrix", [m11, m12, m21, m22, m31, m32]) => {
            Some(Transform::Matrix(*m11, *m12, *m21, *m22, *m31, *m32))
        }
        _ => None,
    }
}
