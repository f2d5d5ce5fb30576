//! Evaluation handle for a path chain.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use pathchain_core::Term;

use crate::query::PathQuery;
use crate::{Error, Result};

/// Document number within one index segment.
pub type DocId = u32;

/// Dictionary collaborator resolving qualified names to index term text.
///
/// The chain only carries the handle; matcher factories call it.
pub trait NameResolver: Send + Sync {
    /// Canonical term text for `qname`, or `None` if the name is unknown.
    fn resolve(&self, qname: &str) -> Option<String>;
}

/// Ascending stream of matching documents in one segment.
pub trait MatchIterator {
    fn next_doc(&mut self) -> Option<DocId>;
}

/// Everything a matcher factory gets for one segment.
pub struct MatchRequest<'q, S: ?Sized> {
    pub query: &'q PathQuery,
    pub field: &'q str,
    pub resolver: Option<&'q Arc<dyn NameResolver>>,
    pub repeats: bool,
    pub segment: &'q S,
}

/// Builds per-segment matchers for path chains.
///
/// `S` is the engine's segment context; the chain makes no assumptions about it.
pub trait MatcherFactory<S: ?Sized> {
    type Iter: MatchIterator;
    type Error;

    fn create(&self, request: MatchRequest<'_, S>)
    -> std::result::Result<Self::Iter, Self::Error>;
}

/// Engine capabilities that structural path queries do not provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    /// Per-document score explanation.
    Explain,
    /// Collecting query terms through the legacy term-set protocol.
    ExtractTerms,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Explain => f.write_str("score explanation"),
            Capability::ExtractTerms => f.write_str("term extraction"),
        }
    }
}

/// Score explanation as an engine would report it.
///
/// Never produced here: [`PathWeight::explain`] always fails. The type fixes
/// the shape engines expect from that call.
#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    pub value: f32,
    pub description: String,
}

/// Evaluation handle binding a finished chain to a matcher factory.
pub struct PathWeight<'q, F> {
    query: &'q PathQuery,
    factory: F,
}

impl<'q, F> PathWeight<'q, F> {
    pub fn new(query: &'q PathQuery, factory: F) -> Self {
        Self { query, factory }
    }

    pub fn query(&self) -> &'q PathQuery {
        self.query
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Path matches are unscored; every hit weighs the same.
    pub fn value_for_normalization(&self) -> f32 {
        1.0
    }

    pub fn normalize(&mut self, _norm: f32, _top_level_boost: f32) {}

    /// Create the matcher for one segment.
    pub fn scorer<S: ?Sized>(&self, segment: &S) -> std::result::Result<F::Iter, F::Error>
    where
        F: MatcherFactory<S>,
    {
        tracing::trace!(
            field = self.query.path_field(),
            steps = self.query.step_count(),
            repeats = self.query.repeats(),
            "creating path matcher"
        );
        self.factory.create(MatchRequest {
            query: self.query,
            field: self.query.path_field(),
            resolver: self.query.resolver(),
            repeats: self.query.repeats(),
            segment,
        })
    }

    pub fn explain<S: ?Sized>(&self, _segment: &S, _doc: DocId) -> Result<Explanation> {
        Err(Error::Unsupported(Capability::Explain))
    }

    pub fn extract_terms(&self, _terms: &mut BTreeSet<Term>) -> Result<()> {
        Err(Error::Unsupported(Capability::ExtractTerms))
    }
}

impl PathQuery {
    /// Bind this chain to an engine's matcher factory.
    pub fn create_weight<F>(&self, factory: F) -> PathWeight<'_, F> {
        PathWeight::new(self, factory)
    }
}
