//! Compiled grammar patterns shared across the parsing and grading modules.
//!
//! Patterns are composed from the numeric fragments below at first use and
//! stay read-only for the process lifetime.

use regex::Regex;
use std::sync::OnceLock;

/// Numeric literal: optional sign, digits, optional fraction and exponent.
pub(crate) const NUMBER: &str = r"[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?";

/// Interval: a literal, optionally followed by `:tolerance` or `..max`.
fn interval() -> String {
    format!(r"{NUMBER}(?::{NUMBER}|\.\.{NUMBER})?")
}

/// One answer option token: `[prefix][%credit%]value[#feedback]`.
///
/// The value runs up to the first unescaped `#`; a backslash escapes any of
/// `=~#{}` and the escaped pair is kept verbatim. Feedback is everything
/// after that `#`, and may itself contain further `#` characters.
pub(crate) fn option() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([=~])?(%-?\d{1,3}%)?((?:\\[=~#{}]|[^=~#])*)(#(?:\\[=~#{}]|[^=~])*)?$")
            .expect("invalid option pattern")
    })
}

/// Body of a `#` number block, after the leading `#` is removed.
///
/// Either a single bare interval, or one-or-more `=`/`~`-prefixed interval
/// clauses with an optional two-digit `%nn%` credit and trailing feedback.
pub(crate) fn number_block() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let interval = interval();
        let clause = format!(r"[=~](?:%\d{{2}}%)?{interval}\s*(?:#[^=~]*)?");
        Regex::new(&format!(r"^(?:{interval}|(?:\s*{clause})+)$"))
            .expect("invalid number block pattern")
    })
}

/// Candidate block span: the shortest `{...}` run not containing `}`.
pub(crate) fn block_candidate() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{[^}]*\}").expect("invalid block candidate pattern"))
}
