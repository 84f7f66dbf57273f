//! Grading: scoring learner answers against classified blocks.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Block, BlockOption, BlockType, Prefix};

/// A learner's answer to one block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Answer {
    /// Free text, for radio, input, and number blocks.
    Text(String),
    /// The set of selected values, for checkbox blocks.
    Selection(Vec<String>),
    Number(f64),
    Bool(bool),
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}

impl From<String> for Answer {
    fn from(text: String) -> Self {
        Answer::Text(text)
    }
}

impl From<f64> for Answer {
    fn from(value: f64) -> Self {
        Answer::Number(value)
    }
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Answer::Bool(value)
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Answer::Selection(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Answer {
    fn from(values: Vec<String>) -> Self {
        Answer::Selection(values)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    /// The operation has no semantics for this block type; calling it is a
    /// usage error, not a data error.
    #[error("{operation} is not supported for {block_type} blocks")]
    Unsupported {
        block_type: BlockType,
        operation: &'static str,
    },
    /// The answer payload does not fit the block type.
    #[error("{block_type} blocks expect {expected} answers")]
    AnswerKind {
        block_type: BlockType,
        expected: &'static str,
    },
}

impl Block {
    /// Scores `answer` against this block.
    ///
    /// Text and matching blocks have no grading semantics and fail with
    /// [`GradeError::Unsupported`].
    pub fn grade(&self, answer: &Answer) -> Result<f64, GradeError> {
        match self {
            Block::Radio(options) => {
                let answer = text_answer(answer, BlockType::Radio)?;
                Ok(find_option(options, answer)
                    .map(|option| {
                        option.credit().unwrap_or(match option.prefix() {
                            Some(Prefix::Correct) => 1.0,
                            _ => 0.0,
                        })
                    })
                    .unwrap_or(0.0))
            }
            Block::Checkbox(options) => {
                let Answer::Selection(selected) = answer else {
                    return Err(GradeError::AnswerKind {
                        block_type: BlockType::Checkbox,
                        expected: "selection",
                    });
                };
                Ok(selected
                    .iter()
                    .map(|value| {
                        options
                            .iter()
                            .find(|o| o.value() == value)
                            .and_then(BlockOption::credit)
                            .unwrap_or(0.0)
                    })
                    .sum())
            }
            Block::Boolean(truth) => {
                let Answer::Bool(answer) = answer else {
                    return Err(GradeError::AnswerKind {
                        block_type: BlockType::Boolean,
                        expected: "boolean",
                    });
                };
                Ok(if truth == answer { 1.0 } else { 0.0 })
            }
            Block::Input(options) => {
                let answer = text_answer(answer, BlockType::Input)?;
                Ok(if find_option(options, answer).is_some() {
                    1.0
                } else {
                    0.0
                })
            }
            Block::Number(options) => {
                let answer = numeric_answer(answer)?;
                Ok(options
                    .iter()
                    .map(|option| numeric_score(option, answer))
                    .fold(0.0, f64::max))
            }
            Block::Text | Block::Matching(_) => Err(self.unsupported("grading")),
        }
    }

    /// The maximum attainable score.
    ///
    /// `None` for text blocks, which are ungraded rather than worth zero.
    pub fn max_score(&self) -> Result<Option<f64>, GradeError> {
        match self {
            Block::Radio(_) | Block::Boolean(_) | Block::Input(_) | Block::Number(_) => {
                Ok(Some(1.0))
            }
            Block::Checkbox(options) => Ok(Some(
                options
                    .iter()
                    .filter_map(BlockOption::credit)
                    .filter(|credit| *credit > 0.0)
                    .sum(),
            )),
            Block::Text => Ok(None),
            Block::Matching(_) => Err(self.unsupported("max score")),
        }
    }

    /// Feedback attached to the option `answer` matches, if any.
    pub fn feedback(&self, answer: &Answer) -> Result<Option<&str>, GradeError> {
        match self {
            Block::Radio(options) => {
                let answer = text_answer(answer, BlockType::Radio)?;
                Ok(find_option(options, answer).and_then(BlockOption::feedback))
            }
            _ => Err(self.unsupported("feedback")),
        }
    }

    fn unsupported(&self, operation: &'static str) -> GradeError {
        GradeError::Unsupported {
            block_type: self.block_type(),
            operation,
        }
    }
}

fn text_answer<'a>(answer: &'a Answer, block_type: BlockType) -> Result<&'a str, GradeError> {
    match answer {
        Answer::Text(text) => Ok(text.trim()),
        _ => Err(GradeError::AnswerKind {
            block_type,
            expected: "text",
        }),
    }
}

fn find_option<'a>(options: &'a [BlockOption], answer: &str) -> Option<&'a BlockOption> {
    options.iter().find(|o| o.value().trim() == answer)
}

/// Coerces a numeric answer, accepting text that parses as a number.
fn numeric_answer(answer: &Answer) -> Result<f64, GradeError> {
    let mismatch = || GradeError::AnswerKind {
        block_type: BlockType::Number,
        expected: "numeric",
    };
    match answer {
        Answer::Number(value) => Ok(*value),
        Answer::Text(text) => text.trim().parse().map_err(|_| mismatch()),
        _ => Err(mismatch()),
    }
}

/// Scores one numeric clause: credit inside the tolerance window or range
/// (boundaries inclusive), or on exact equality; zero otherwise.
fn numeric_score(option: &BlockOption, answer: f64) -> f64 {
    let credit = option.credit().unwrap_or(1.0);
    let value = option.value();

    let hit = if let Some((mean, tolerance)) = split_numeric(value, ":") {
        (mean - tolerance..=mean + tolerance).contains(&answer)
    } else if let Some((min, max)) = split_numeric(value, "..") {
        (min..=max).contains(&answer)
    } else {
        value.parse::<f64>().is_ok_and(|v| v == answer)
    };

    if hit { credit } else { 0.0 }
}

fn split_numeric(value: &str, separator: &str) -> Option<(f64, f64)> {
    let (left, right) = value.split_once(separator)?;
    Some((left.parse().ok()?, right.parse().ok()?))
}
