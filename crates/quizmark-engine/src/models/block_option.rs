use serde::Serialize;
use std::fmt;

use crate::parsing::ParseError;

/// Marks an option as a correct (`=`) or incorrect (`~`) choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Prefix {
    Correct,
    Incorrect,
}

impl Prefix {
    pub fn as_char(self) -> char {
        match self {
            Prefix::Correct => '=',
            Prefix::Incorrect => '~',
        }
    }

    pub(crate) fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Prefix::Correct),
            '~' => Some(Prefix::Incorrect),
            _ => None,
        }
    }
}

/// One answer choice or accepted value within a block.
///
/// Constructed only through [`BlockOption::new`], which enforces that the
/// value is non-empty and that the credit, if present, is a finite fraction
/// in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockOption {
    prefix: Option<Prefix>,
    credit: Option<f64>,
    value: String,
    feedback: Option<String>,
}

impl BlockOption {
    pub fn new(
        prefix: Option<Prefix>,
        credit: Option<f64>,
        value: impl Into<String>,
        feedback: Option<String>,
    ) -> Result<Self, ParseError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ParseError::EmptyValue);
        }
        if let Some(credit) = credit
            && (!credit.is_finite() || !(-1.0..=1.0).contains(&credit))
        {
            return Err(ParseError::InvalidCredit(credit));
        }
        Ok(Self {
            prefix,
            credit,
            value,
            feedback,
        })
    }

    pub fn prefix(&self) -> Option<Prefix> {
        self.prefix
    }

    /// Fractional weight in `[-1, 1]`, if one was written as `%nn%`.
    pub fn credit(&self) -> Option<f64> {
        self.credit
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

impl fmt::Display for BlockOption {
    /// Renders the option back into its source shape
    /// `[prefix][%credit%]value[#feedback]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}", prefix.as_char())?;
        }
        if let Some(credit) = self.credit {
            write!(f, "%{}%", (credit * 100.0).round() as i64)?;
        }
        write!(f, "{}", self.value)?;
        if let Some(feedback) = &self.feedback {
            write!(f, "#{feedback}")?;
        }
        Ok(())
    }
}
