use serde::Serialize;

use super::Block;
use crate::grading::{Answer, GradeError};
use crate::parsing::segment_spans;

/// One contiguous piece of a question: literal text, or the source text of
/// a span that classified as a block when the question was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Span {
    Text(String),
    Block(String),
}

impl Span {
    pub fn as_str(&self) -> &str {
        match self {
            Span::Text(text) | Span::Block(text) => text,
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Span::Block(_))
    }

    pub(crate) fn into_string(self) -> String {
        match self {
            Span::Text(text) | Span::Block(text) => text,
        }
    }
}

/// A whole question: an immutable, ordered span sequence.
///
/// Construction never fails. A span whose braces do not classify stays in
/// the sequence as literal text, so such a question still masks and grades;
/// only that span is inert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    spans: Vec<Span>,
}

impl Question {
    pub fn from_text(text: &str) -> Self {
        Self {
            spans: segment_spans(text, Block::is_valid),
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The classified blocks, in question order.
    fn blocks(&self) -> impl Iterator<Item = Block> + '_ {
        self.spans
            .iter()
            .filter(|span| span.is_block())
            .filter_map(|span| Block::parse(span.as_str()).ok())
    }

    /// Rejoins the question with every block span replaced by its masked
    /// stub. Literal spans, and block spans with no masked form, pass
    /// through unchanged.
    pub fn mask(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Block(text) => Block::parse(text)
                    .ok()
                    .and_then(|block| block.to_masked_string().ok())
                    .unwrap_or_else(|| text.clone()),
                Span::Text(text) => text.clone(),
            })
            .collect()
    }

    /// Sums the grades of the classifiable blocks, in order.
    ///
    /// `answers` is positional over those blocks; `None` skips a block, and
    /// answers beyond the block count are ignored. Grading failures on an
    /// answered block propagate.
    pub fn grade(&self, answers: &[Option<Answer>]) -> Result<f64, GradeError> {
        let mut total = 0.0;
        for (block, answer) in self.blocks().zip(answers) {
            if let Some(answer) = answer {
                total += block.grade(answer)?;
            }
        }
        Ok(total)
    }

    /// Sums the maximum attainable scores of the classifiable blocks.
    /// Ungraded (text) blocks contribute nothing.
    pub fn max_score(&self) -> Result<f64, GradeError> {
        let mut total = 0.0;
        for block in self.blocks() {
            if let Some(score) = block.max_score()? {
                total += score;
            }
        }
        Ok(total)
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn masks_a_radio_question() {
        let question = Question::from_text("What is 1 + 1? {~1 =2 ~3}");
        assert_eq!(question.mask(), "What is 1 + 1? {=1 =2 =3}");
    }

    #[test]
    fn masking_leaves_unclassifiable_spans_alone() {
        let question = Question::from_text("code { x } here {=yes ~no}");
        assert_eq!(question.mask(), "code { x } here {=yes =no}");
    }

    #[test]
    fn masking_passes_matching_blocks_through() {
        let text = "Pair them up: { =cat -> cat food =dog -> dog food }";
        let question = Question::from_text(text);
        assert_eq!(question.mask(), text);
    }

    #[test]
    fn spans_round_trip_to_the_source_text() {
        let text = "1 + 1 {#2}. Sure! How about 2 * 2: {=4 ~5}";
        let question = Question::from_text(text);
        let rejoined: String = question
            .spans()
            .iter()
            .map(|span| span.as_str())
            .collect();
        assert_eq!(rejoined, text);
    }

    #[test]
    fn grades_blocks_positionally() {
        let question =
            Question::from_text("2 + 2 = {#4} and the sky is {=blue ~green}, right? {TRUE}");
        let graded = question
            .grade(&[
                Some(Answer::from(4.0)),
                Some(Answer::from("blue")),
                Some(Answer::from(true)),
            ])
            .unwrap();
        assert_eq!(graded, 3.0);
    }

    #[test]
    fn unanswered_blocks_are_skipped() {
        let question =
            Question::from_text("2 + 2 = {#4} and the sky is {=blue ~green}, right? {TRUE}");
        let graded = question
            .grade(&[None, Some(Answer::from("blue"))])
            .unwrap();
        assert_eq!(graded, 1.0);

        assert_eq!(question.grade(&[]).unwrap(), 0.0);
    }

    #[test]
    fn extra_answers_are_ignored() {
        let question = Question::from_text("Just one: {=yes ~no}");
        let graded = question
            .grade(&[Some(Answer::from("yes")), Some(Answer::from("ignored"))])
            .unwrap();
        assert_eq!(graded, 1.0);
    }

    #[test]
    fn max_score_sums_over_blocks() {
        let question =
            Question::from_text("Essay: {} Select: {~%30%a ~b ~%70%c} Number: {#1..2}");
        let max = question.max_score().unwrap();
        assert!((max - 2.0).abs() < 1e-9);
    }

    #[test]
    fn questions_build_from_str_refs() {
        let question = Question::from("1 + 1 {=2}");
        assert_eq!(question.spans().len(), 2);
        assert!(question.spans()[1].is_block());
    }
}
