#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core vocabulary for structural path queries.
//!
//! A path query is an ordered chain of [`FieldPosition`]s. Positions come in
//! pairs (a *unit*): the first carries the node test, the second the value
//! test. Both positions of a unit share the same [`Axis`].
//!
//! This crate holds only the value types; chain construction, rendering and
//! identity live in `pathchain-lib`.

use std::fmt;

use serde::{Deserialize, Serialize};

mod colors;

pub use colors::Colors;


/// Number of positions that make up one logical path step.
pub const UNIT_SIZE: usize = 2;

/// Field holding tokenized path text when no other field is configured.
pub const DEFAULT_PATH_FIELD: &str = "PATH";

/// Term text of the index root anchor.
pub const ROOT_TERM_TEXT: &str = ";";

// ============================================================================
// Axis
// ============================================================================

/// Structural relationship a step expresses relative to the preceding step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
    /// Step anchored at a fixed depth below the root (`/a/b`).
    Absolute,
    /// Child step following a descendant-or-self step (`//a/b`, the `b`).
    Relative,
    /// Zero or more intermediate levels (`//`).
    DescendantOrSelf,
    /// The context node itself (`.`).
    #[serde(rename = "self")]
    SelfAxis,
}

/// Linking capabilities declared by an axis.
///
/// `links_*` describe what a step needs from its predecessor;
/// `allows_linking_by_*` describe what a step offers to its successor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Linking {
    pub links_parent: bool,
    pub links_self: bool,
    pub allows_linking_by_parent: bool,
    pub allows_linking_by_self: bool,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Absolute,
        Axis::Relative,
        Axis::DescendantOrSelf,
        Axis::SelfAxis,
    ];

    /// Linking capabilities carried by this axis.
    pub const fn linking(self) -> Linking {
        match self {
            Axis::Absolute => Linking {
                links_parent: false,
                links_self: false,
                allows_linking_by_parent: true,
                allows_linking_by_self: true,
            },
            Axis::Relative => Linking {
                links_parent: true,
                links_self: false,
                allows_linking_by_parent: true,
                allows_linking_by_self: true,
            },
            Axis::DescendantOrSelf | Axis::SelfAxis => Linking {
                links_parent: false,
                links_self: true,
                allows_linking_by_parent: true,
                allows_linking_by_self: false,
            },
        }
    }

    pub const fn links_parent(self) -> bool {
        self.linking().links_parent
    }

    pub const fn links_self(self) -> bool {
        self.linking().links_self
    }

    pub const fn allows_linking_by_parent(self) -> bool {
        self.linking().allows_linking_by_parent
    }

    pub const fn allows_linking_by_self(self) -> bool {
        self.linking().allows_linking_by_self
    }

    /// Axis name as shown in dumps and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Absolute => "absolute",
            Axis::Relative => "relative",
            Axis::DescendantOrSelf => "descendant-or-self",
            Axis::SelfAxis => "self",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Positions and steps
// ============================================================================

/// One sub-position of a path step.
///
/// `text` is the qualified-name part tested at this position;
/// `None` matches anything.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldPosition {
    pub axis: Axis,
    pub text: Option<String>,
}

impl FieldPosition {
    pub fn new(axis: Axis, text: Option<&str>) -> Self {
        Self {
            axis,
            text: text.map(str::to_owned),
        }
    }

    pub fn wildcard(axis: Axis) -> Self {
        Self { axis, text: None }
    }

    /// Both positions of one unit: `[node_test, value_test]`.
    pub fn unit(
        axis: Axis,
        node_test: Option<&str>,
        value_test: Option<&str>,
    ) -> [Self; UNIT_SIZE] {
        [Self::new(axis, node_test), Self::new(axis, value_test)]
    }

    /// Term text of this position, if it is not a wildcard.
    #[inline]
    pub fn term_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        self.text.is_none()
    }
}

/// Borrowed view over the two positions of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep<'a> {
    node: &'a FieldPosition,
    value: &'a FieldPosition,
}

impl<'a> PathStep<'a> {
    /// View a unit slice as a step. Returns `None` unless it holds exactly
    /// [`UNIT_SIZE`] positions.
    pub fn from_unit(unit: &'a [FieldPosition]) -> Option<Self> {
        match unit {
            [node, value] => Some(Self { node, value }),
            _ => None,
        }
    }

    /// The step's axis, taken from its leading position.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.node.axis
    }

    #[inline]
    pub fn node_test(&self) -> Option<&'a str> {
        self.node.term_text()
    }

    #[inline]
    pub fn value_test(&self) -> Option<&'a str> {
        self.value.term_text()
    }

    /// True when neither position carries text.
    pub fn is_wildcard(&self) -> bool {
        self.node.is_wildcard() && self.value.is_wildcard()
    }

    pub fn positions(&self) -> (&'a FieldPosition, &'a FieldPosition) {
        (self.node, self.value)
    }
}

// ============================================================================
// Terms
// ============================================================================

/// A `(field, text)` reference handed to index-term resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term {
    pub field: String,
    pub text: String,
}

impl Term {
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.text)
    }
}
