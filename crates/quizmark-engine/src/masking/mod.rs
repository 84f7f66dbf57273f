//! Masking: answer-stripped block stubs for UI previews.
//!
//! A masked stub keeps the block's delimiters, prefixes, and option values
//! but drops credits, feedback, and (for booleans) the truth value, so a
//! consumer can preview a question's structure without seeing its answers.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Block, BlockOption, BlockType, Prefix};
use crate::parsing::options::{parse_option, split_options};
use crate::parsing::{ParseError, delimited_body};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{0} blocks have no masked form")]
pub struct MaskError(pub BlockType);

/// The type shell recovered from a masked stub.
///
/// Deliberately not a [`Block`]: a stub carries strictly less information,
/// so re-parsing one can only yield the type and, for option lists, the
/// values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MaskedBlock {
    Text,
    Boolean,
    Number,
    Input,
    Radio(Vec<String>),
    Checkbox(Vec<String>),
}

impl MaskedBlock {
    pub fn block_type(&self) -> BlockType {
        match self {
            MaskedBlock::Text => BlockType::Text,
            MaskedBlock::Boolean => BlockType::Boolean,
            MaskedBlock::Number => BlockType::Number,
            MaskedBlock::Input => BlockType::Input,
            MaskedBlock::Radio(_) => BlockType::Radio,
            MaskedBlock::Checkbox(_) => BlockType::Checkbox,
        }
    }

    /// Option values carried by the stub; empty for the bare shells.
    pub fn values(&self) -> &[String] {
        match self {
            MaskedBlock::Radio(values) | MaskedBlock::Checkbox(values) => values,
            _ => &[],
        }
    }

    /// Parses a canonical masked stub.
    ///
    /// Recognizes exactly the bare `{}`/`{~}`/`{#}`/`{=}` shells plus
    /// prefix-homogeneous option lists (`=` for radio, `~` for checkbox).
    /// Anything else fails.
    pub fn parse(stub: &str) -> Result<Self, ParseError> {
        let body = delimited_body(stub)?;
        match body {
            "" => Ok(MaskedBlock::Text),
            "~" => Ok(MaskedBlock::Boolean),
            "#" => Ok(MaskedBlock::Number),
            "=" => Ok(MaskedBlock::Input),
            _ => {
                let options = split_options(body)
                    .iter()
                    .map(|token| parse_option(token))
                    .collect::<Result<Vec<_>, _>>()?;
                if options.is_empty() {
                    return Err(ParseError::InvalidMasked(stub.to_string()));
                }
                let values = |options: &[BlockOption]| -> Vec<String> {
                    options.iter().map(|o| o.value().to_string()).collect()
                };
                if options.iter().all(|o| o.prefix() == Some(Prefix::Incorrect)) {
                    Ok(MaskedBlock::Checkbox(values(&options)))
                } else if options.iter().all(|o| o.prefix() == Some(Prefix::Correct)) {
                    Ok(MaskedBlock::Radio(values(&options)))
                } else {
                    Err(ParseError::InvalidMasked(stub.to_string()))
                }
            }
        }
    }
}

impl Block {
    /// Renders the canonical answer-stripped stub for this block.
    ///
    /// Matching blocks have no masked form and return [`MaskError`].
    pub fn to_masked_string(&self) -> Result<String, MaskError> {
        match self {
            Block::Text => Ok("{}".to_string()),
            Block::Boolean(_) => Ok("{~}".to_string()),
            Block::Number(_) => Ok("{#}".to_string()),
            Block::Input(_) => Ok("{=}".to_string()),
            Block::Radio(options) => Ok(stub(options, Prefix::Correct)),
            Block::Checkbox(options) => Ok(stub(options, Prefix::Incorrect)),
            Block::Matching(_) => Err(MaskError(BlockType::Matching)),
        }
    }
}

/// `{<p>v1 <p>v2 ...}` with every value re-prefixed.
fn stub(options: &[BlockOption], prefix: Prefix) -> String {
    let values: Vec<String> = options
        .iter()
        .map(|o| format!("{}{}", prefix.as_char(), o.value()))
        .collect();
    format!("{{{}}}", values.join(" "))
}
