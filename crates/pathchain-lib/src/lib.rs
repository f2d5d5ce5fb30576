//! pathchain: structural path-pattern queries over a tokenized path index.
//!
//! # Example
//!
//! ```
//! use pathchain_lib::{Axis, PathQuery};
//!
//! let mut query = PathQuery::new();
//! query.append_step(Axis::Absolute, Some("app"), Some("company_home"));
//! query.append_step(Axis::DescendantOrSelf, None, None);
//! query.append_step(Axis::Relative, Some("cm"), Some("folder"));
//!
//! assert_eq!(query.to_string(), "PATH:/{app}:company_home//cm:folder");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;
pub mod parser;
pub mod query;

pub use engine::{
    Capability, DocId, MatchIterator, MatchRequest, MatcherFactory, NameResolver, PathWeight,
};
pub use parser::{Dropped, ParseError, ParseOptions, Parsed, parse, parse_with};
pub use pathchain_core::{
    Axis, Colors, DEFAULT_PATH_FIELD, FieldPosition, Linking, PathStep, ROOT_TERM_TEXT, Term,
    UNIT_SIZE,
};
pub use query::{AppendOutcome, PathQuery, QueryPrinter, Rejection};

/// Errors raised by chain construction and by the engine seam.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Whole-chain replacement with a length that is not a multiple of the unit size.
    #[error("path chain of {len} positions is not a multiple of the unit size {}", UNIT_SIZE)]
    InvalidChainLength { len: usize },

    /// Append with a unit of the wrong width.
    #[error("path unit has {len} positions, expected {}", UNIT_SIZE)]
    InvalidUnitSize { len: usize },

    #[error("{0} is not supported for structural path queries")]
    Unsupported(Capability),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for chain operations.
pub type Result<T> = std::result::Result<T, Error>;
