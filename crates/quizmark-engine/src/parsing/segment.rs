//! Question segmentation.
//!
//! Curly braces are ambiguous in question text: they delimit answer blocks
//! but also show up as literal characters, for instance inside code
//! samples. Instead of a single pattern with lookbehind, segmentation runs
//! in two passes: a naive non-greedy `{...}` split, then a left-to-right
//! walk that merges false-positive candidates back into the preceding
//! literal span.

use super::grammar;
use crate::models::{Block, Span};

/// Splits `text` into ordered spans, deciding real block boundaries with
/// `predicate`.
///
/// The walk keeps one bit of state, whether the previous chunk was
/// accepted. While the previous chunk was accepted every chunk starts a new
/// span; once a chunk is rejected, following rejected chunks are
/// concatenated onto it until the predicate accepts again. Joining the
/// returned spans reproduces `text` exactly.
pub fn split_blocks_with_predicate<P>(text: &str, predicate: P) -> Vec<String>
where
    P: Fn(&str) -> bool,
{
    segment_spans(text, predicate)
        .into_iter()
        .map(|span| span.into_string())
        .collect()
}

/// Splits on strict block validity, for parsing and grading.
pub fn split_blocks(text: &str) -> Vec<String> {
    split_blocks_with_predicate(text, Block::is_valid)
}

/// Splits on masked validity, for operating over already-masked text.
pub fn split_masked_blocks(text: &str) -> Vec<String> {
    split_blocks_with_predicate(text, Block::is_valid_masked)
}

pub(crate) fn segment_spans<P>(text: &str, predicate: P) -> Vec<Span>
where
    P: Fn(&str) -> bool,
{
    let mut spans: Vec<Span> = Vec::new();
    let mut accepted = true;

    for chunk in naive_chunks(text) {
        if accepted {
            accepted = predicate(chunk);
            spans.push(if accepted {
                Span::Block(chunk.to_string())
            } else {
                Span::Text(chunk.to_string())
            });
        } else if predicate(chunk) {
            spans.push(Span::Block(chunk.to_string()));
            accepted = true;
        } else {
            // two rejected chunks in a row belong to the same literal run
            match spans.last_mut() {
                Some(Span::Text(last)) => last.push_str(chunk),
                _ => spans.push(Span::Text(chunk.to_string())),
            }
        }
    }
    spans
}

/// Alternating literal/candidate chunks from the non-greedy `{...}` split,
/// with empty chunks dropped.
fn naive_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut cursor = 0;
    for candidate in grammar::block_candidate().find_iter(text) {
        if candidate.start() > cursor {
            chunks.push(&text[cursor..candidate.start()]);
        }
        chunks.push(candidate.as_str());
        cursor = candidate.end();
    }
    if cursor < text.len() {
        chunks.push(&text[cursor..]);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_a_simple_question() {
        let question = "1 + 1 {=2}";
        let spans = split_blocks(question);
        assert_eq!(spans, vec!["1 + 1 ", "{=2}"]);
        assert_eq!(spans.concat(), question);
    }

    #[test]
    fn splits_questions_into_expected_chunks() {
        let questions: Vec<Vec<&str>> = vec![
            vec!["1 + 1 ", "{#2}", ". Sure!"],
            vec!["1 + 1 ", "{#2}", ". Sure! How about 2 * 2:", "{=4 ~5}"],
            vec!["String without answer blocks"],
        ];
        for chunks in questions {
            let text = chunks.concat();
            assert_eq!(split_blocks(&text), chunks);
        }
    }

    #[test]
    fn merges_invalid_candidates_into_surrounding_text() {
        let question = "```let x = 1; { y }``` Is this correct? {=yes ~no}";
        let spans = split_blocks(question);
        assert_eq!(
            spans,
            vec!["```let x = 1; { y }``` Is this correct? ", "{=yes ~no}"]
        );
        assert_eq!(spans.concat(), question);
    }

    #[test]
    fn an_early_rejected_chunk_absorbs_its_successors() {
        let question = "{ not a block } trailing prose";
        assert_eq!(split_blocks(question), vec![question]);
    }

    #[test]
    fn rejoining_spans_is_lossless() {
        let texts = [
            "plain text only",
            "{=a ~b} leading block",
            "code { x } then {#1..2} and { more } text",
            "unclosed { brace",
        ];
        for text in texts {
            assert_eq!(split_blocks(text).concat(), text);
        }
    }

    #[test]
    fn masked_split_accepts_stubs_the_strict_split_rejects() {
        let masked = "Pick some: {~a ~b} and write: {=}";
        let spans = split_masked_blocks(masked);
        assert_eq!(spans, vec!["Pick some: ", "{~a ~b}", " and write: ", "{=}"]);

        // the bare `{=}` stub is not a valid block under the strict split
        let strict = split_blocks("write: {=}");
        assert_eq!(strict, vec!["write: {=}"]);
    }

    #[test]
    fn predicate_controls_the_split() {
        let everything = split_blocks_with_predicate("a {b} c", |_| true);
        assert_eq!(everything, vec!["a ", "{b}", " c"]);

        let nothing = split_blocks_with_predicate("a {b} c", |_| false);
        assert_eq!(nothing, vec!["a {b} c"]);
    }
}
