//! The path pattern chain and its derived representations.
//!
//! - `chain`: construction protocol and identity
//! - `render`: canonical string form
//! - `terms`: projection to index term references
//! - `printer`: per-step dump for plan inspection

mod chain;
mod invariants;
mod printer;
mod render;
mod terms;

#[cfg(test)]
mod properties_tests;

pub use chain::{AppendOutcome, PathQuery, Rejection};
pub use printer::QueryPrinter;
