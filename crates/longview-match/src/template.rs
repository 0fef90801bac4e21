//! Template tokenizer and regex compiler.
//!
//! A template is literal text with three kinds of special tokens:
//!
//! - `{name}` — a named placeholder (a letter or `_`, then at least one more
//!   word character)
//! - `*` — one or more arbitrary characters
//! - `+` — one or more word characters
//!
//! A backslash directly in front of `{`, `*` or `+` makes that character
//! literal. Anything that does not form a token, such as `{foo` or `{a}`,
//! is literal text.

use std::collections::{HashMap, HashSet};
use winnow::combinator::{alt, preceded};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_while};

use crate::matcher::PatternError;

/// A piece of a tokenized template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, with escapes already removed.
    Literal(String),
    /// A named placeholder, `{name}`.
    Placeholder(String),
    /// `*`
    Wildcard,
    /// `+`
    Word,
}

#[derive(Clone)]
enum Piece {
    Token(Token),
    Char(char),
}

// ============ Tokenizer ============

pub fn tokenize(template: &str) -> Vec<Token> {
    let mut input = template;
    let mut tokens = Vec::new();
    let mut literal = String::new();

    while let Ok(piece) = template_piece.parse_next(&mut input) {
        match piece {
            Piece::Char(c) => literal.push(c),
            Piece::Token(token) => {
                if !literal.is_empty() {
                    tokens.push(Token::Literal(std::mem::take(&mut literal)));
                }
                tokens.push(token);
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}

fn template_piece(input: &mut &str) -> ModalResult<Piece> {
    alt((
        placeholder.map(|name| Piece::Token(Token::Placeholder(name))),
        '*'.value(Piece::Token(Token::Wildcard)),
        '+'.value(Piece::Token(Token::Word)),
        escaped.map(Piece::Char),
        any.map(Piece::Char),
    ))
    .parse_next(input)
}

fn placeholder(input: &mut &str) -> ModalResult<String> {
    '{'.parse_next(input)?;
    let first: char = one_of(|c: char| c.is_ascii_alphabetic() || c == '_').parse_next(input)?;
    let rest: &str =
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)?;
    '}'.parse_next(input)?;
    Ok(format!("{}{}", first, rest))
}

fn escaped(input: &mut &str) -> ModalResult<char> {
    preceded('\\', one_of(['{', '*', '+'])).parse_next(input)
}

// ============ Compiler ============

const PLACEHOLDER_BODY: &str = ".*?";
const WILDCARD: &str = ".+?";
const WORD: &str = "[0-9A-Za-z_]+?";

/// Builds the anchored expression source for `tokens`.
///
/// Placeholders named in `defaults` become optional groups so that the
/// surrounding literal text can match without them.
pub fn compile_source(
    tokens: &[Token],
    defaults: &HashMap<String, String>,
) -> Result<String, PatternError> {
    let mut seen = HashSet::new();
    let mut regex_str = String::new();

    for token in tokens {
        match token {
            Token::Literal(text) => regex_str.push_str(&regex::escape(text)),
            Token::Placeholder(name) => {
                if !seen.insert(name.as_str()) {
                    return Err(PatternError::DuplicatePlaceholder { name: name.clone() });
                }
                regex_str.push_str(&format!("(?P<{}>{})", name, PLACEHOLDER_BODY));
                if defaults.contains_key(name) {
                    regex_str.push('?');
                }
            }
            Token::Wildcard => regex_str.push_str(WILDCARD),
            Token::Word => regex_str.push_str(WORD),
        }
    }

    // Dotall so placeholders and `*` span newlines
    Ok(format!("(?s)^{}$", regex_str))
}

/// Anchors a validator fragment so it has to match a whole capture.
pub fn validator_source(fragment: &str) -> String {
    format!("^(?:{})$", fragment)
}
