use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::BlockOption;
use crate::masking::MaskedBlock;
use crate::parsing::ParseError;
use crate::parsing::classify;

/// The seven block kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockType {
    Text,
    Boolean,
    Number,
    Matching,
    Input,
    Radio,
    Checkbox,
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockType::Text => "TEXT",
            BlockType::Boolean => "BOOLEAN",
            BlockType::Number => "NUMBER",
            BlockType::Matching => "MATCHING",
            BlockType::Input => "INPUT",
            BlockType::Radio => "RADIO",
            BlockType::Checkbox => "CHECKBOX",
        };
        write!(f, "{name}")
    }
}

/// One classified answer specification.
///
/// The kind is decided once, at parse time, and carries its own payload:
/// a boolean block holds the synthesized truth value, every other
/// non-empty kind holds its ordered options. Option order matters only for
/// display; grading never depends on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Text,
    Boolean(bool),
    Number(Vec<BlockOption>),
    Matching(Vec<BlockOption>),
    Input(Vec<BlockOption>),
    Radio(Vec<BlockOption>),
    Checkbox(Vec<BlockOption>),
}

impl Block {
    /// Classifies a `{...}`-bounded span.
    pub fn parse(span: &str) -> Result<Self, ParseError> {
        classify::parse_block(span)
    }

    /// Parses a canonical masked stub into its type shell.
    pub fn parse_masked(stub: &str) -> Result<MaskedBlock, ParseError> {
        MaskedBlock::parse(stub)
    }

    /// The block type `span` would classify as, if any.
    pub fn type_of(span: &str) -> Option<BlockType> {
        Self::parse(span).ok().map(|block| block.block_type())
    }

    /// Whether `span` classifies as a block. Never fails.
    pub fn is_valid(span: &str) -> bool {
        Self::parse(span).is_ok()
    }

    /// Whether `stub` parses as a masked stub. Never fails.
    pub fn is_valid_masked(stub: &str) -> bool {
        MaskedBlock::parse(stub).is_ok()
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            Block::Text => BlockType::Text,
            Block::Boolean(_) => BlockType::Boolean,
            Block::Number(_) => BlockType::Number,
            Block::Matching(_) => BlockType::Matching,
            Block::Input(_) => BlockType::Input,
            Block::Radio(_) => BlockType::Radio,
            Block::Checkbox(_) => BlockType::Checkbox,
        }
    }

    /// The block's options, in source order. Empty for text and boolean
    /// blocks.
    pub fn options(&self) -> &[BlockOption] {
        match self {
            Block::Text | Block::Boolean(_) => &[],
            Block::Number(options)
            | Block::Matching(options)
            | Block::Input(options)
            | Block::Radio(options)
            | Block::Checkbox(options) => options,
        }
    }
}

impl FromStr for Block {
    type Err = ParseError;

    fn from_str(span: &str) -> Result<Self, Self::Err> {
        Self::parse(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_of_probes_without_failing() {
        assert_eq!(Block::type_of("{}"), Some(BlockType::Text));
        assert_eq!(Block::type_of("{TRUE}"), Some(BlockType::Boolean));
        assert_eq!(Block::type_of("{#0.1}"), Some(BlockType::Number));
        assert_eq!(Block::type_of("{=yes ~no}"), Some(BlockType::Radio));
        assert_eq!(Block::type_of("{true}"), None);
        assert_eq!(Block::type_of("no braces"), None);
    }

    #[test]
    fn is_valid_matches_classification() {
        assert!(Block::is_valid("{=correct ~wrong}"));
        assert!(!Block::is_valid("{#}"));
        assert!(!Block::is_valid("not delimited"));
    }

    #[test]
    fn is_valid_masked_accepts_only_canonical_stubs() {
        for stub in ["{}", "{#}", "{=}", "{~}", "{=a =b}", "{~a ~b}"] {
            assert!(Block::is_valid_masked(stub), "{stub} should be valid");
        }
        for stub in ["{=a ~b}", "{ some text }"] {
            assert!(!Block::is_valid_masked(stub), "{stub} should be invalid");
        }
    }

    #[test]
    fn blocks_parse_through_from_str() {
        let block: Block = "{=four =4}".parse().unwrap();
        assert_eq!(block.block_type(), BlockType::Input);
        assert_eq!(block.options().len(), 2);
    }
}
