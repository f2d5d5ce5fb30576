//! ANSI color codes for step dumps.
//!
//! Three roles plus reset:
//! - Axis: axis names in step listings
//! - Term: concrete name text (anything that becomes an index term)
//! - Dim: indices, wildcards, separators

/// ANSI palette used by the step printer.
///
/// Only standard 16-color codes, so output stays readable on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub axis: &'static str,
    pub term: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        axis: "\x1b[34m",
        term: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        axis: "",
        term: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
