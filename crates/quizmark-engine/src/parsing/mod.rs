//! Parsing: block classification and question segmentation.

pub(crate) mod classify;
pub(crate) mod grammar;
pub(crate) mod options;
mod segment;

pub use segment::{split_blocks, split_blocks_with_predicate, split_masked_blocks};
pub(crate) use segment::segment_spans;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// Span not bounded by `{` and `}`.
    #[error("block must start with '{{' and end with '}}': {0}")]
    NotDelimited(String),
    /// A `#`-led body that fails the numeric/interval grammar.
    #[error("invalid number block: {0}")]
    InvalidNumberBlock(String),
    /// An option token the option grammar cannot assemble.
    #[error("could not parse option: {0}")]
    InvalidOption(String),
    /// An option with nothing left after stripping prefix and credit.
    #[error("option value must not be empty")]
    EmptyValue,
    /// A credit that is not a finite number in `[-1, 1]`.
    #[error("invalid credit {0}, must be a finite number in [-1, 1]")]
    InvalidCredit(f64),
    /// Option prefixes that match none of the block shapes.
    #[error("option prefixes do not form a recognized block shape: {0}")]
    UnclassifiableOptions(String),
    /// A stub that is not one of the canonical masked forms.
    #[error("not a masked block stub: {0}")]
    InvalidMasked(String),
}

/// Strips the `{`/`}` bounding pair, rejecting unbounded spans.
pub(crate) fn delimited_body(span: &str) -> Result<&str, ParseError> {
    span.strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ParseError::NotDelimited(span.to_string()))
}
