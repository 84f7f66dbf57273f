//! Option tokenization and parsing.

use super::{ParseError, grammar};
use crate::models::{BlockOption, Prefix};

/// Characters a backslash can escape inside option text.
const SPECIALS: [char; 5] = ['=', '~', '#', '{', '}'];

/// Splits a block body into option tokens.
///
/// A token begins at an unescaped `=` or `~` and runs until the next
/// unescaped `=`/`~` or the end of the body. A backslash immediately before
/// one of `=~#{}` keeps that character (and the backslash itself) inside the
/// current token. Text before the first delimiter becomes its own token.
/// Tokens are trimmed; empty ones are dropped.
pub(crate) fn split_options(body: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut flush = |current: &mut String| {
        let token = current.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
        current.clear();
    };

    let mut chars = body.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                current.push('\\');
                if let Some(&next) = chars.peek()
                    && SPECIALS.contains(&next)
                {
                    current.push(next);
                    chars.next();
                }
            }
            '=' | '~' => {
                flush(&mut current);
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    flush(&mut current);
    tokens
}

/// Parses one option token of shape `[prefix][%credit%]value[#feedback]`.
///
/// A credit whose absolute value exceeds 1 is not an error: the `%...%` text
/// is folded back into the literal value and the credit left unset, so
/// values that merely look like they carry a percentage still parse.
pub(crate) fn parse_option(token: &str) -> Result<BlockOption, ParseError> {
    let captures = grammar::option()
        .captures(token)
        .ok_or_else(|| ParseError::InvalidOption(token.to_string()))?;

    let prefix = captures
        .get(1)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Prefix::from_char);
    let credit_text = captures.get(2).map(|m| m.as_str());
    let value = captures.get(3).map_or("", |m| m.as_str());
    let feedback = captures.get(4).map(|m| m.as_str()[1..].to_string());

    let credit = match credit_text {
        Some(text) => Some(
            text[1..text.len() - 1]
                .parse::<f64>()
                .map(|percent| percent / 100.0)
                .map_err(|_| ParseError::InvalidOption(token.to_string()))?,
        ),
        None => None,
    };

    match BlockOption::new(prefix, credit, value.trim(), feedback.clone()) {
        Err(ParseError::InvalidCredit(_)) => {
            let literal = format!("{}{value}", credit_text.unwrap_or(""));
            BlockOption::new(prefix, None, literal.trim(), feedback)
        }
        result => result,
    }
}
