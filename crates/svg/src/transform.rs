//! Transform list entries and their SVG-syntax serializer.
//! Spec: <https://www.w3.org/TR/SVG11/coords.html#TransformAttribute>

use core::fmt;

/// One entry of a transform list.
///
/// Serializing a list with [`transforms_text`] and parsing it back yields
/// an equivalent list (not necessarily identical text).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// `translate(tx, ty)`
    Translate(f64, f64),
    /// `scale(sx, sy)`
    Scale(f64, f64),
    /// `rotate(angle)` about the origin, or about an explicit center.
    Rotate(f64, Option<(f64, f64)>),
    /// `skewX(angle)`
    SkewX(f64),
    /// `skewY(angle)`
    SkewY(f64),
    /// `matrix(a, b, c, d, e, f)`
    Matrix(f64, f64, f64, f64, f64, f64),
}

impl fmt::Display for Transform {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Translate(tx, ty) => write!(formatter, "translate({tx}, {ty})"),
            Self::Scale(sx, sy) => write!(formatter, "scale({sx}, {sy})"),
            Self::Rotate(angle, None) => write!(formatter, "rotate({angle})"),
            Self::Rotate(angle, Some((cx, cy))) => {
                write!(formatter, "rotate({angle}, {cx}, {cy})")
            }
            Self::SkewX(angle) => write!(formatter, "skewX({angle})"),
            Self::SkewY(angle) => write!(formatter, "skewY({angle})"),
            Self::Matrix(m11, m12, m21, m22, m31, m32) => {
                write!(
                    formatter,
                    "matrix({m11}, {m12}, {m21}, {m22}, {m31}, {m32})"
                )
            }
        }
    }
}

/// Serialize a transform list as space-separated function calls.
pub fn transforms_text(transforms: &[Transform]) -> String {
    let rendered: Vec<String> = transforms.iter().map(ToString::to_string).collect();
    rendered.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the serialized forms of each entry kind.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_display_forms() {
        assert_eq!(
            Transform::Translate(10.0, 20.0).to_string(),
            "translate(10, 20)"
        );
        assert_eq!(Transform::Scale(2.0, 2.0).to_string(), "scale(2, 2)");
        assert_eq!(Transform::Rotate(45.0, None).to_string(), "rotate(45)");
        assert_eq!(
            Transform::Rotate(30.0, Some((5.0, 6.0))).to_string(),
            "rotate(30, 5, 6)"
        );
        assert_eq!(Transform::SkewX(1.5).to_string(), "skewX(1.5)");
        assert_eq!(
            Transform::Matrix(1.0, 0.0, 0.0, 1.0, 7.0, 8.0).to_string(),
            "matrix(1, 0, 0, 1, 7, 8)"
        );
    }

    /// Test list serialization joins entries with spaces.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_list_serialization() {
        let list = [Transform::Translate(10.0, 20.0), Transform::Scale(2.0, 2.0)];
        assert_eq!(transforms_text(&list), "translate(10, 20) scale(2, 2)");
        assert_eq!(transforms_text(&[]), "");
    }
}
