use std::num::{ParseFloatError, ParseIntError};

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("number of {field} matches is incorrect. Should be {expected} but is {found} (in {input:?})")]
    MatchCount {
        field: &'static str,
        expected: usize,
        found: usize,
        input: String,
    },
    #[error("availability link {text:?} has no href")]
    MissingHref { text: String },
    #[error("could not read {value:?} as a number: {source}")]
    InvalidNumber {
        value: String,
        #[source]
        source: InvalidNumberSource,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidNumberSource {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

impl ExtractError {
    pub(crate) fn match_count(field: &'static str, expected: usize, found: usize, input: &str) -> Self {
        Self::MatchCount {
            field,
            expected,
            found,
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_number(value: &str, source: impl Into<InvalidNumberSource>) -> Self {
        Self::InvalidNumber {
            value: value.to_string(),
            source: source.into(),
        }
    }
}
