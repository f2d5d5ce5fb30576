//! Canonical string form of a chain.
//!
//! One token group per step, prefixed by the `PATH:` tag:
//!
//! | Axis | Output |
//! |---|---|
//! | absolute | `/*` or `/{node}:value` |
//! | relative | `/*` or `/node:value` |
//! | descendant-or-self | `//` |
//! | self | `.` |
//!
//! A single wildcard side renders as `*`. The `//` of a descendant-or-self
//! step doubles as the separator of the step after it, so that step drops
//! its own leading `/` (`/{app}:company_home//cm:folder`).

use std::fmt::{self, Write};

use pathchain_core::{Axis, PathStep};

use super::PathQuery;

const FIELD_TAG: &str = "PATH:";

impl fmt::Display for PathQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(FIELD_TAG)?;
        let mut after_descendant = false;
        for step in self.steps() {
            write_step(f, step, after_descendant)?;
            after_descendant = step.axis() == Axis::DescendantOrSelf;
        }
        Ok(())
    }
}

fn write_step(
    w: &mut fmt::Formatter<'_>,
    step: PathStep<'_>,
    after_descendant: bool,
) -> fmt::Result {
    match step.axis() {
        Axis::Absolute => {
            separator(w, after_descendant)?;
            if step.is_wildcard() {
                return w.write_char('*');
            }
            write!(w, "{{{}}}:{}", or_star(step.node_test()), or_star(step.value_test()))
        }
        Axis::Relative => {
            separator(w, after_descendant)?;
            if step.is_wildcard() {
                return w.write_char('*');
            }
            write!(w, "{}:{}", or_star(step.node_test()), or_star(step.value_test()))
        }
        Axis::DescendantOrSelf => w.write_str("//"),
        Axis::SelfAxis => w.write_char('.'),
    }
}

fn separator(w: &mut fmt::Formatter<'_>, after_descendant: bool) -> fmt::Result {
    if after_descendant {
        return Ok(());
    }
    w.write_char('/')
}

fn or_star(text: Option<&str>) -> &str {
    text.unwrap_or("*")
}
