//! Chain model and construction protocol.
//!
//! A chain is built by a single owner through whole-chain replacement
//! ([`PathQuery::set_query`]) or tail appends ([`PathQuery::append_query`]),
//! then handed to the query engine, which only reads it.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use pathchain_core::{Axis, DEFAULT_PATH_FIELD, FieldPosition, PathStep, UNIT_SIZE};

use super::invariants::{debug_assert_aligned, ensure_step, ensure_unit_width};
use crate::engine::NameResolver;
use crate::{Error, Result};

/// Result of a well-formed append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    Appended,
    /// The unit was dropped; the chain is unchanged.
    Rejected(Rejection),
}

impl AppendOutcome {
    pub fn is_appended(self) -> bool {
        matches!(self, AppendOutcome::Appended)
    }
}

/// Why an append was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The new step links to its parent, but the last step does not allow parent linking.
    ParentLink,
    /// The new step links to itself, but the last step does not allow self linking.
    SelfLink,
}

/// Ordered chain of path steps against one tokenized path field.
#[derive(Clone)]
pub struct PathQuery {
    path_field: String,
    positions: Vec<FieldPosition>,
    /// Pass-through for the matcher factory; never consulted here.
    resolver: Option<Arc<dyn NameResolver>>,
    repeats: bool,
}

impl Default for PathQuery {
    fn default() -> Self {
        Self {
            path_field: DEFAULT_PATH_FIELD.to_owned(),
            positions: Vec::new(),
            resolver: None,
            repeats: false,
        }
    }
}

impl PathQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the name-resolution handle forwarded to matcher factories.
    pub fn with_resolver(mut self, resolver: Arc<dyn NameResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn path_field(&self) -> &str {
        &self.path_field
    }

    pub fn set_path_field(&mut self, field: impl Into<String>) {
        self.path_field = field.into();
    }

    pub fn repeats(&self) -> bool {
        self.repeats
    }

    pub fn set_repeats(&mut self, repeats: bool) {
        self.repeats = repeats;
    }

    pub fn resolver(&self) -> Option<&Arc<dyn NameResolver>> {
        self.resolver.as_ref()
    }

    /// Replace the whole chain.
    ///
    /// Fails with [`Error::InvalidChainLength`] unless `positions` is
    /// unit-aligned; the current chain is kept in that case.
    pub fn set_query(&mut self, positions: Vec<FieldPosition>) -> Result<()> {
        if positions.len() % UNIT_SIZE != 0 {
            return Err(Error::InvalidChainLength {
                len: positions.len(),
            });
        }
        self.positions = positions;
        Ok(())
    }

    /// Append one unit after the current last step.
    ///
    /// Fails with [`Error::InvalidUnitSize`] for a unit of the wrong width.
    /// A unit whose axis cannot follow the current last step is dropped
    /// without touching the chain and reported as [`AppendOutcome::Rejected`].
    pub fn append_query(&mut self, unit: &[FieldPosition]) -> Result<AppendOutcome> {
        let [next, _] = unit else {
            return Err(Error::InvalidUnitSize { len: unit.len() });
        };

        if let Some(rejection) = link_rejection(self.last(), next) {
            return Ok(AppendOutcome::Rejected(rejection));
        }

        self.positions.extend_from_slice(unit);
        debug_assert_aligned(&self.positions);
        Ok(AppendOutcome::Appended)
    }

    /// Append a step given by its axis and tests.
    pub fn append_step(
        &mut self,
        axis: Axis,
        node_test: Option<&str>,
        value_test: Option<&str>,
    ) -> AppendOutcome {
        let unit = FieldPosition::unit(axis, node_test, value_test);
        ensure_unit_width(self.append_query(&unit))
    }

    /// Drop trailing self-linking steps (`//`, `.`).
    pub fn remove_descendant_and_self(&mut self) {
        while self.last().is_some_and(|last| last.axis.links_self()) {
            let len = self.positions.len();
            self.positions.truncate(len - UNIT_SIZE);
        }
        debug_assert_aligned(&self.positions);
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of positions (twice the number of steps).
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn step_count(&self) -> usize {
        self.positions.len() / UNIT_SIZE
    }

    pub fn positions(&self) -> &[FieldPosition] {
        &self.positions
    }

    pub fn steps(&self) -> impl ExactSizeIterator<Item = PathStep<'_>> + '_ {
        self.positions.chunks_exact(UNIT_SIZE).map(ensure_step)
    }

    fn last(&self) -> Option<&FieldPosition> {
        self.positions.last()
    }
}

fn link_rejection(last: Option<&FieldPosition>, next: &FieldPosition) -> Option<Rejection> {
    let last = last?.axis;
    if next.axis.links_parent() && !last.allows_linking_by_parent() {
        return Some(Rejection::ParentLink);
    }
    if next.axis.links_self() && !last.allows_linking_by_self() {
        return Some(Rejection::SelfLink);
    }
    None
}

// ============================================================================
// Identity
// ============================================================================

impl PartialEq for PathQuery {
    fn eq(&self, other: &Self) -> bool {
        self.path_field == other.path_field
            && self.positions == other.positions
            && self.repeats == other.repeats
    }
}

impl Eq for PathQuery {}

impl Hash for PathQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path_field.hash(state);
        UNIT_SIZE.hash(state);
        self.positions.hash(state);
        self.repeats.hash(state);
    }
}

impl fmt::Debug for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathQuery")
            .field("path_field", &self.path_field)
            .field("positions", &self.positions)
            .field("repeats", &self.repeats)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}
