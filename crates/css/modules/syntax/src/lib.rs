//! CSS Syntax Module Level 3 — declaration, rule, and stylesheet grammar.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
//!
//! This layer drives the shared scanner through the selector grammar and
//! the value grammar to build typed rules. Parsing is strict: a failure
//! anywhere aborts the whole stylesheet parse. The lenient
//! empty-on-failure contract lives in the orchestrator.

#![forbid(unsafe_code)]

use css_selectors::{CssSelector, parse_selector_list};
use css_values_units::lexer::{self, Cursor};
use css_values_units::values::{at_term_start, value_term};
use css_values_units::{CssElement, ParseError, ParseErrorKind};

/// A single CSS declaration: property name and its ordered value terms,
/// with `,`/`/` operators retained in sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct CssDeclaration {
    /// Property name as authored.
    pub property: String,
    /// Value terms and retained operators, in source order.
    pub values: Vec<CssElement>,
}

/// A style rule: comma-separated selector alternatives and the rule body.
///
/// Declarations preserve source order; that order is the tie-break for
/// same-property conflicts during the cascade.
#[derive(Clone, Debug, PartialEq)]
pub struct CssRule {
    /// Selector alternatives; any one matching counts.
    pub selectors: Vec<Vec<CssSelector>>,
    /// Rule body in source order.
    pub declarations: Vec<CssDeclaration>,
}

/// A parsed stylesheet: rules in source order. Rule order is the outer
/// tie-break (a later rule wins over an earlier one).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stylesheet {
    /// Top-level rules in source order.
    pub rules: Vec<CssRule>,
}

/// Parse a whole stylesheet.
///
/// # Errors
/// Returns the location-tagged [`ParseError`] of the first failure; no
/// partial rule list is ever produced.
pub fn parse_stylesheet(text: &str) -> Result<Stylesheet, ParseError> {
    let mut cursor = Cursor::new(text);
    let mut rules = Vec::new();
    cursor.skip_space();
    while !cursor.is_done() {
        rules.push(rule(&mut cursor)?);
        cursor.skip_space();
    }
    Ok(Stylesheet { rules })
}

/// Parse `selector-list { declaration* }`.
fn rule(cursor: &mut Cursor<'_>) -> Result<CssRule, ParseError> {
    let selectors = parse_selector_list(cursor)?;
    cursor.skip_space();
    if !cursor.eat('{') {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    let mut declarations = Vec::new();
    cursor.skip_space();
    loop {
        match cursor.peek() {
            Some('}') => {
                cursor.bump();
                break;
            }
            Some(';') => {
                cursor.bump();
                cursor.skip_space();
            }
            Some(_) => {
                declarations.push(declaration(cursor)?);
                cursor.skip_space();
            }
            None => return Err(cursor.error(ParseErrorKind::UnexpectedEnd)),
        }
    }
    Ok(CssRule {
        selectors,
        declarations,
    })
}

/// Parse `property : term+ !important? ;?` with operators retained.
///
/// The `!important` keyword is recognized and discarded; it carries no
/// distinct precedence in this engine.
fn declaration(cursor: &mut Cursor<'_>) -> Result<CssDeclaration, ParseError> {
    let property = lexer::ident(cursor)?;
    cursor.skip_space();
    if !cursor.eat(':') {
        return Err(cursor.error(ParseErrorKind::UnexpectedToken));
    }
    cursor.skip_space();
    let mut values = vec![value_term(cursor)?];
    loop {
        cursor.skip_space();
        match cursor.peek() {
            Some(',') => {
                cursor.bump();
                values.push(CssElement::Comma);
            }
            Some('/') => {
                cursor.bump();
                values.push(CssElement::Slash);
            }
            Some('!') => {
                cursor.bump();
                cursor.skip_space();
                let keyword = lexer::ident(cursor)?;
                if keyword != "important" {
                    return Err(cursor.error(ParseErrorKind::UnexpectedToken));
                }
                break;
            }
            Some(_) if at_term_start(cursor) => values.push(value_term(cursor)?),
            _ => break,
        }
    }
    cursor.skip_space();
    cursor.eat(';');
    Ok(CssDeclaration { property, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_selectors::ElementName;
    use css_values_units::{Color, Number};

    /// Test a small two-rule stylesheet parses in source order.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_two_rules() {
        let sheet = parse_stylesheet(
            "rect { fill: red; stroke-width: 2px }\n.big { fill-opacity: .5 }",
        );
        let parsed = sheet.unwrap_or_default();
        assert_eq!(parsed.rules.len(), 2);
        let first = parsed.rules.first();
        assert!(first.is_some_and(|rule| rule.declarations.len() == 2));
        let second_values: Option<&Vec<CssElement>> = parsed
            .rules
            .get(1)
            .and_then(|rule| rule.declarations.first())
            .map(|decl| &decl.values);
        assert_eq!(
            second_values,
            Some(&vec![CssElement::Number(Number::absolute(0.5))])
        );
    }

    /// Test `!important` is consumed and discarded.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_important_discarded() {
        let sheet = parse_stylesheet("rect { fill: blue !important; }");
        let declaration = sheet
            .ok()
            .and_then(|parsed| parsed.rules.into_iter().next())
            .and_then(|rule| rule.declarations.into_iter().next());
        assert_eq!(
            declaration,
            Some(CssDeclaration {
                property: "fill".to_owned(),
                values: vec![CssElement::Color(Color::opaque(0, 0, 255))],
            })
        );

        assert!(parse_stylesheet("rect { fill: blue !imprtnt; }").is_err());
    }

    /// Test operators are retained in the value sequence.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_operators_retained() {
        let sheet = parse_stylesheet("text { font: 12px / 14px serif, cursive; }");
        let values = sheet
            .ok()
            .and_then(|parsed| parsed.rules.into_iter().next())
            .and_then(|rule| rule.declarations.into_iter().next())
            .map(|decl| decl.values);
        let comma_count = values
            .iter()
            .flatten()
            .filter(|value| matches!(value, CssElement::Comma))
            .count();
        let slash_count = values
            .iter()
            .flatten()
            .filter(|value| matches!(value, CssElement::Slash))
            .count();
        assert_eq!(comma_count, 1);
        assert_eq!(slash_count, 1);
    }

    /// Test selector alternatives survive into the rule.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_selector_alternatives() {
        let sheet = parse_stylesheet("circle, rect { fill: none }");
        let selectors = sheet
            .ok()
            .and_then(|parsed| parsed.rules.into_iter().next())
            .map(|rule| rule.selectors);
        let expected = vec![
            vec![CssSelector::AllOf(
                ElementName::Named("circle".to_owned()),
                Vec::new(),
            )],
            vec![CssSelector::AllOf(
                ElementName::Named("rect".to_owned()),
                Vec::new(),
            )],
        ];
        assert_eq!(selectors, Some(expected));
    }

    /// Test malformed stylesheets fail as a whole.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_malformed_is_an_error() {
        assert!(parse_stylesheet("rect { fill: red").is_err());
        assert!(parse_stylesheet("rect fill red }").is_err());
        assert!(parse_stylesheet("{ fill: red }").is_err());
        assert!(parse_stylesheet("rect { fill red }").is_err());
    }

    /// Test comments are skippable at every grammar boundary.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_comment_tolerance() {
        let sheet = parse_stylesheet(
            "/* head */ rect /* mid */ { /* in */ fill: /* val */ red ; /* tail */ }",
        );
        assert!(sheet.is_ok_and(|parsed| parsed.rules.len() == 1));
    }
}
