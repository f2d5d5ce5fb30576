//! Path-expression parser.
//!
//! Turns expressions such as `/app:company_home//cm:folder/*` into a
//! [`PathQuery`](crate::PathQuery), one unit per step, through the chain's
//! regular append protocol.

mod error;
mod grammar;
mod lexer;
mod options;


pub use error::ParseError;
pub use grammar::{Dropped, Parsed, parse, parse_with};
pub use options::ParseOptions;
