//! Errors produced while parsing path expressions.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("path expression is empty")]
    Empty,

    #[error("unexpected {found} at offset {offset}, expected {expected}")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: &'static str,
    },

    #[error("unexpected end of path expression, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("path expression has more than {limit} steps")]
    TooManySteps { limit: usize },
}
