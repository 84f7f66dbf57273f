//! Block classification.
//!
//! Classifies one `{...}`-bounded span into a typed block. The cascade
//! tries the cheap shapes first (empty, boolean, number grammar) and only
//! then tokenizes the body into options and dispatches on prefix
//! homogeneity. First match wins; the decision is made once at parse time.

use super::options::{parse_option, split_options};
use super::{ParseError, delimited_body, grammar};
use crate::models::{Block, BlockOption, Prefix};

/// Classifies `span` into a [`Block`], or reports why it is not one.
pub(crate) fn parse_block(span: &str) -> Result<Block, ParseError> {
    let body = delimited_body(span)?;

    if body.trim().is_empty() {
        return Ok(Block::Text);
    }
    if matches!(body, "TRUE" | "FALSE" | "T" | "F") {
        return Ok(Block::Boolean(matches!(body, "TRUE" | "T")));
    }
    if let Some(rest) = body.strip_prefix('#') {
        return parse_number_block(span, rest);
    }

    let options = split_options(body)
        .iter()
        .map(|token| parse_option(token))
        .collect::<Result<Vec<_>, _>>()?;
    classify_options(span, options)
}

/// Parses the body of a `#` number block (leading `#` already removed).
///
/// The whole remainder must satisfy the number-block grammar; after that,
/// each `=`-separated clause is re-prefixed and parsed as a regular option,
/// so per-clause credit and feedback come out of the shared option parser.
fn parse_number_block(span: &str, rest: &str) -> Result<Block, ParseError> {
    if !grammar::number_block().is_match(rest) {
        return Err(ParseError::InvalidNumberBlock(span.to_string()));
    }

    let options = rest
        .split('=')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(|clause| parse_option(&format!("={clause}")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Block::Number(options))
}

/// Dispatches on prefix homogeneity. A token without a prefix rules out
/// every shape.
fn classify_options(span: &str, options: Vec<BlockOption>) -> Result<Block, ParseError> {
    let all_incorrect = options.iter().all(|o| o.prefix() == Some(Prefix::Incorrect));
    let all_correct = options.iter().all(|o| o.prefix() == Some(Prefix::Correct));
    let all_prefixed = options.iter().all(|o| o.prefix().is_some());

    if all_incorrect {
        Ok(Block::Checkbox(options))
    } else if all_correct {
        if options.iter().all(|o| o.value().contains("->")) {
            Ok(Block::Matching(options))
        } else {
            Ok(Block::Input(options))
        }
    } else if all_prefixed {
        Ok(Block::Radio(options))
    } else {
        Err(ParseError::UnclassifiableOptions(span.to_string()))
    }
}
