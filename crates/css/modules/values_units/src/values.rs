//! The token-level value grammar: terms, functions, references, operators.
//! Spec: <https://www.w3.org/TR/css-values-3/#value-defs>

use crate::color::{Color, hex_color, named_color, rgb_component};
use crate::lexer::{self, Cursor};
use crate::number::{self, Number};
use crate::{ParseError, ParseErrorKind};

/// One parsed value token. Immutable once parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum CssElement {
    /// Numeric literal with its unit tag.
    Number(Number),
    /// Resolved color: keyword, hex body, or eager `rgb()` reduction.
    Color(Color),
    /// Double-quoted string.
    String(String),
    /// Bare identifier that is not a color keyword.
    Ident(String),
    /// Functional notation: name and ordered arguments.
    Function(String, Vec<CssElement>),
    /// `#name` reference.
    Reference(String),
    /// `,` operator retained between terms.
    Comma,
    /// `/` operator retained between terms.
    Slash,
}

/// True when the cursor sits at the start of a value term.
pub fn at_term_start(cursor: &Cursor<'_>) -> bool {
    match cursor.peek() {
        Some('"' | '#' | '.' | '+' | '-') => true,
        Some(character) if character.is_ascii_digit() => true,
        Some(_) => lexer::at_ident_start(cursor),
        None => false,
    }
}

/// Parse one top-level value term.
///
/// # Errors
/// Returns a [`ParseError`] when the input does not begin with a term.
pub fn value_term(cursor: &mut Cursor<'_>) -> Result<CssElement, ParseError> {
    term(cursor, false)
}

/// Parse one term; inside function arguments `#name` always stays a
/// reference (so `url(#fade)` never reads as a hex color).
fn term(cursor: &mut Cursor<'_>, in_function_args: bool) -> Result<CssElement, ParseError> {
    match cursor.peek() {
        Some('"') => lexer::string(cursor).map(CssElement::String),
        Some('#') => {
            cursor.bump();
            let name = hash_name(cursor)?;
            if in_function_args {
                return Ok(CssElement::Reference(name));
            }
            if let Some(color) = hex_color(&name) {
                return Ok(CssElement::Color(color));
            }
            Ok(CssElement::Reference(name))
        }
        Some(character) if character.is_ascii_digit() || character == '.' || character == '+' => {
            number::number(cursor).map(CssElement::Number)
        }
        Some('-')
            if matches!(
                cursor.peek_second(),
                Some(second) if second.is_ascii_digit() || second == '.'
            ) =>
        {
            number::number(cursor).map(CssElement::Number)
        }
        Some(_) if lexer::at_ident_start(cursor) => {
            let name = lexer::ident(cursor)?;
            if cursor.peek() == Some('(') {
                return function_call(cursor, name);
            }
            if let Some(color) = named_color(&name) {
                return Ok(CssElement::Color(color));
            }
            Ok(CssElement::Ident(name))
        }
        Some(_) => Err(cursor.error(ParseErrorKind::UnexpectedToken)),
        None => Err(cursor.error(ParseErrorKind::UnexpectedEnd)),
    }
}

/// Consume the body of a `#name` token: a non-empty name-character run.
///
/// Hex color bodies may start with a digit, so this is looser than the
/// identifier rule.
fn hash_name(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    let mut name = String::new();
    while let Some(character) = cursor.peek() {
        if !lexer::is_name_continue(character) {
            break;
        }
        cursor.bump();
        name.push(character);
    }
    if name.is_empty() {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    Ok(name)
}

/// Parse `( arg, arg, ... )` after the function name.
fn function_call(cursor: &mut Cursor<'_>, name: String) -> Result<CssElement, ParseError> {
    cursor.bump();
    let mut arguments = Vec::new();
    cursor.skip_space();
    while cursor.peek() != Some(')') {
        arguments.push(term(cursor, true)?);
        cursor.skip_space();
        if cursor.eat(',') {
            cursor.skip_space();
        }
    }
    if !cursor.eat(')') {
        return Err(cursor.error(ParseErrorKind::UnexpectedEnd));
    }
    Ok(reduce_function(name, arguments))
}

/// Reduce a three-argument all-numeric `rgb()` call to a color value;
/// every other call stays a function element.
fn reduce_function(name: String, arguments: Vec<CssElement>) -> CssElement {
    if name == "rgb" && arguments.len() == 3 {
        let channels: Vec<Number> = arguments
            .iter()
            .filter_map(|argument| {
                if let CssElement::Number(value) = argument {
                    return Some(*value);
                }
                None
            })
            .collect();
        if let [red, green, blue] = channels.as_slice() {
            return CssElement::Color(Color::opaque(
                rgb_component(*red),
                rgb_component(*green),
                rgb_component(*blue),
            ));
        }
    }
    CssElement::Function(name, arguments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::Unit;

    fn parse_one(text: &str) -> Result<CssElement, ParseError> {
        let mut cursor = Cursor::new(text);
        cursor.skip_space();
        value_term(&mut cursor)
    }

    /// Test color keyword, hex, and plain identifier resolution.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_ident_and_color_terms() {
        assert_eq!(
            parse_one("red").ok(),
            Some(CssElement::Color(Color::opaque(255, 0, 0)))
        );
        assert_eq!(
            parse_one("#102030").ok(),
            Some(CssElement::Color(Color::opaque(16, 32, 48)))
        );
        assert_eq!(
            parse_one("evenodd").ok(),
            Some(CssElement::Ident("evenodd".to_owned()))
        );
        assert_eq!(
            parse_one("#not-a-color").ok(),
            Some(CssElement::Reference("not-a-color".to_owned()))
        );
    }

    /// Test the eager `rgb()` reduction and its clamping rules.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_rgb_reduction() {
        assert_eq!(
            parse_one("rgb(255, 0, 0)").ok(),
            Some(CssElement::Color(Color::opaque(255, 0, 0)))
        );
        assert_eq!(
            parse_one("rgb(110%, -10, 0)").ok(),
            Some(CssElement::Color(Color::opaque(255, 0, 0)))
        );
        // A non-numeric argument keeps the call as a function element.
        let kept = parse_one("rgb(a, 0, 0)").ok();
        assert!(matches!(kept, Some(CssElement::Function(name, _)) if name == "rgb"));
    }

    /// Test references inside function arguments never read as colors.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_url_reference_argument() {
        let parsed = parse_one("url(#fade01)").ok();
        let expected = CssElement::Function(
            "url".to_owned(),
            vec![CssElement::Reference("fade01".to_owned())],
        );
        assert_eq!(parsed, Some(expected));
    }

    /// Test generic function calls keep their argument order.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_function_arguments() {
        let parsed = parse_one("translate(10, 20px)").ok();
        let expected = CssElement::Function(
            "translate".to_owned(),
            vec![
                CssElement::Number(Number::absolute(10.0)),
                CssElement::Number(Number::new(20.0, Unit::Pixel)),
            ],
        );
        assert_eq!(parsed, Some(expected));
    }
}
