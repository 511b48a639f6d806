//! CSS selector parsing over the shared scanner.
//! Spec: <https://www.w3.org/TR/selectors-3/#w3cselgrammar>

use crate::{CssDescriptor, CssSelector, ElementName};
use css_values_units::lexer::{self, Cursor};
use css_values_units::{ParseError, ParseErrorKind};

/// Parse a comma-separated selector list.
/// Spec: Section 4 — Groups of selectors
///
/// # Errors
/// Returns a [`ParseError`] when any selector in the list is malformed.
pub fn parse_selector_list(cursor: &mut Cursor<'_>) -> Result<Vec<Vec<CssSelector>>, ParseError> {
    let mut list = vec![parse_selector(cursor)?];
    cursor.skip_space();
    while cursor.eat(',') {
        cursor.skip_space();
        list.push(parse_selector(cursor)?);
        cursor.skip_space();
    }
    Ok(list)
}

/// Parse one full selector: a leading compound folded with
/// `combinator? compound` links. Whitespace with no explicit combinator
/// token relates two compounds as descendant.
/// Spec: Section 3, 11
///
/// # Errors
/// Returns a [`ParseError`] when the input does not begin with a
/// compound selector.
pub fn parse_selector(cursor: &mut Cursor<'_>) -> Result<Vec<CssSelector>, ParseError> {
    cursor.skip_space();
    let mut chain = vec![compound(cursor)?];
    loop {
        cursor.skip_space();
        match cursor.peek() {
            Some('>') => {
                cursor.bump();
                cursor.skip_space();
                chain.push(CssSelector::DirectChild);
                chain.push(compound(cursor)?);
            }
            Some('+') => {
                cursor.bump();
                cursor.skip_space();
                chain.push(CssSelector::AdjacentSibling);
                chain.push(compound(cursor)?);
            }
            Some('*' | '.' | '#' | ':' | '[') => {
                chain.push(compound(cursor)?);
            }
            Some(_) if lexer::at_ident_start(cursor) => {
                chain.push(compound(cursor)?);
            }
            _ => break,
        }
    }
    Ok(chain)
}

/// Parse one compound selector: an element name (identifier or `*`)
/// followed by zero or more modifiers, or one or more modifiers with an
/// implicit universal element.
/// Spec: Section 5 — Simple selector sequences
fn compound(cursor: &mut Cursor<'_>) -> Result<CssSelector, ParseError> {
    let mut explicit_name = false;
    let name = if cursor.eat('*') {
        explicit_name = true;
        ElementName::Any
    } else if lexer::at_ident_start(cursor) {
        explicit_name = true;
        ElementName::Named(lexer::ident(cursor)?)
    } else {
        ElementName::Any
    };

    let mut descriptors = Vec::new();
    loop {
        match cursor.peek() {
            Some('.') => {
                cursor.bump();
                descriptors.push(CssDescriptor::ByClass(lexer::ident(cursor)?));
            }
            Some('#') => {
                cursor.bump();
                descriptors.push(CssDescriptor::ById(lexer::ident(cursor)?));
            }
            Some(':') => {
                cursor.bump();
                descriptors.push(CssDescriptor::ByPseudoClass(lexer::ident(cursor)?));
            }
            Some('[') => descriptors.push(attribute_descriptor(cursor)?),
            _ => break,
        }
    }

    if !explicit_name && descriptors.is_empty() {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    Ok(CssSelector::AllOf(name, descriptors))
}

/// Parse `[name=value]`; the value may be an identifier or a quoted
/// string. Only the equality form exists in this grammar.
/// Spec: Section 8 — Attribute selectors
fn attribute_descriptor(cursor: &mut Cursor<'_>) -> Result<CssDescriptor, ParseError> {
    cursor.bump();
    cursor.skip_space();
    let name = lexer::ident(cursor)?;
    cursor.skip_space();
    if !cursor.eat('=') {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    cursor.skip_space();
    let value = if cursor.peek() == Some('"') {
        lexer::string(cursor)?
    } else {
        lexer::ident(cursor)?
    };
    cursor.skip_space();
    if !cursor.eat(']') {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    Ok(CssDescriptor::ByAttribute { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_all(text: &str) -> Result<Vec<Vec<CssSelector>>, ParseError> {
        let mut cursor = Cursor::new(text);
        parse_selector_list(&mut cursor)
    }

    fn named(name: &str) -> ElementName {
        ElementName::Named(name.to_owned())
    }

    /// Test compounds with names, modifiers, and the implicit universal.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_compound_forms() {
        let parsed = parse_all("rect.big#main");
        let expected = vec![vec![CssSelector::AllOf(
            named("rect"),
            vec![
                CssDescriptor::ByClass("big".to_owned()),
                CssDescriptor::ById("main".to_owned()),
            ],
        )]];
        assert_eq!(parsed.ok(), Some(expected));

        let bare = parse_all(".big");
        let expected_bare = vec![vec![CssSelector::AllOf(
            ElementName::Any,
            vec![CssDescriptor::ByClass("big".to_owned())],
        )]];
        assert_eq!(bare.ok(), Some(expected_bare));

        assert!(parse_all("{").is_err());
    }

    /// Test explicit combinators and the implicit descendant.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_combinator_chains() {
        let parsed = parse_all("g > rect + circle text");
        let expected = vec![vec![
            CssSelector::AllOf(named("g"), Vec::new()),
            CssSelector::DirectChild,
            CssSelector::AllOf(named("rect"), Vec::new()),
            CssSelector::AdjacentSibling,
            CssSelector::AllOf(named("circle"), Vec::new()),
            CssSelector::AllOf(named("text"), Vec::new()),
        ]];
        assert_eq!(parsed.ok(), Some(expected));
    }

    /// Test comma-separated alternatives and comment tolerance.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_selector_list() {
        let parsed = parse_all("circle /* round */ , *");
        let expected = vec![
            vec![CssSelector::AllOf(named("circle"), Vec::new())],
            vec![CssSelector::AllOf(ElementName::Any, Vec::new())],
        ];
        assert_eq!(parsed.ok(), Some(expected));
    }

    /// Test attribute and pseudo-class modifiers.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_attribute_and_pseudo() {
        let parsed = parse_all("rect[kind=\"round\"]:hover");
        let expected = vec![vec![CssSelector::AllOf(
            named("rect"),
            vec![
                CssDescriptor::ByAttribute {
                    name: "kind".to_owned(),
                    value: "round".to_owned(),
                },
                CssDescriptor::ByPseudoClass("hover".to_owned()),
            ],
        )]];
        assert_eq!(parsed.ok(), Some(expected));

        assert!(parse_all("rect[kind]").is_err());
    }
}
