//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use pathchain_core::{FieldPosition, PathStep, UNIT_SIZE};

use super::AppendOutcome;
use crate::Result;

/// View a chunk produced by `chunks_exact(UNIT_SIZE)` as a step.
pub(super) fn ensure_step(unit: &[FieldPosition]) -> PathStep<'_> {
    PathStep::from_unit(unit).unwrap_or_else(|| {
        panic!(
            "PathQuery: unit of {} positions (expected {UNIT_SIZE}, \
             set_query/append_query must keep the chain unit-aligned)",
            unit.len()
        )
    })
}

pub(super) fn debug_assert_aligned(positions: &[FieldPosition]) {
    debug_assert_eq!(
        positions.len() % UNIT_SIZE,
        0,
        "PathQuery: chain length {} is not unit-aligned",
        positions.len()
    );
}

/// Unwrap an append of a unit built by `FieldPosition::unit`, which always has
/// the right width.
pub(super) fn ensure_unit_width(appended: Result<AppendOutcome>) -> AppendOutcome {
    match appended {
        Ok(outcome) => outcome,
        Err(err) => panic!("PathQuery: unit from FieldPosition::unit rejected: {err}"),
    }
}
