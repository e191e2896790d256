//! Compiled patterns.

use super::render::Moment;
use super::token::Token;

/// One piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Text copied through unchanged.
    Literal(String),
    /// A token replaced by a rendered field.
    Token(Token),
}

/// A pattern split into literal runs and tokens.
///
/// ```
/// use sd_time::format::{Item, Pattern, Token};
///
/// let p = Pattern::parse("dd-MM");
/// assert_eq!(
///     p.items(),
///     &[
///         Item::Token(Token::DayPadded),
///         Item::Literal("-".into()),
///         Item::Token(Token::MonthPadded),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pattern {
    items: Vec<Item>,
}

impl Pattern {
    /// Scan `pattern` left to right, taking the longest token at each
    /// position and copying every other character.
    pub fn parse(pattern: &str) -> Self {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut rest = pattern;
        while let Some(c) = rest.chars().next() {
            match Token::match_prefix(rest) {
                Some((token, len)) => {
                    if !literal.is_empty() {
                        items.push(Item::Literal(std::mem::take(&mut literal)));
                    }
                    items.push(Item::Token(token));
                    rest = &rest[len..];
                }
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }
        tracing::trace!(pattern, items = items.len(), "compiled format pattern");
        Self { items }
    }

    /// The compiled items, in order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Render `moment` into a new string.
    pub fn render(&self, moment: &Moment) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::Token(token) => moment.write_token(&mut out, *token),
            }
        }
        out
    }
}

impl From<&str> for Pattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for item in &self.items {
            match item {
                Item::Literal(text) => f.write_str(text)?,
                Item::Token(token) => write!(f, "{token}")?,
            }
        }
        Ok(())
    }
}
