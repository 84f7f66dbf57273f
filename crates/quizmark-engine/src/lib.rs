//! Core engine for the quizmark quiz-authoring markup.
//!
//! Question prose carries `{...}` answer blocks; this crate segments the
//! prose, classifies each block into one of seven types, grades learner
//! answers against them, and renders answer-stripped masked previews.
//!
//! ```
//! use quizmark_engine::{Answer, Question};
//!
//! let question = Question::from_text("What is 1 + 1? {=2 ~3}");
//! assert_eq!(question.mask(), "What is 1 + 1? {=2 =3}");
//!
//! let score = question.grade(&[Some(Answer::from("2"))]).unwrap();
//! assert_eq!(score, 1.0);
//! ```

pub mod grading;
pub mod masking;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use grading::{Answer, GradeError};
pub use masking::{MaskError, MaskedBlock};
pub use models::{Block, BlockOption, BlockType, Prefix, Question, Span};
pub use parsing::{ParseError, split_blocks, split_blocks_with_predicate, split_masked_blocks};
