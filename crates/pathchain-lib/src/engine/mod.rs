//! Seam between a finished chain and the engine that evaluates it.
//!
//! The chain never walks the index itself. A [`MatcherFactory`] supplied by
//! the engine turns a [`MatchRequest`] into a per-segment [`MatchIterator`];
//! [`PathWeight`] is the evaluation handle that forwards to it.

mod weight;

#[cfg(test)]
mod weight_tests;

pub use weight::{
    Capability, DocId, Explanation, MatchIterator, MatchRequest, MatcherFactory, NameResolver,
    PathWeight,
};
