use std::fmt::Write;

use pathchain_core::{Axis, Colors, PathStep};

use super::PathQuery;

/// Width of the longest axis name (`descendant-or-self`).
const AXIS_COLUMN: usize = 18;

pub struct QueryPrinter<'q> {
    query: &'q PathQuery,
    terms: bool,
    colors: Colors,
}

impl<'q> QueryPrinter<'q> {
    pub fn new(query: &'q PathQuery) -> Self {
        Self {
            query,
            terms: false,
            colors: Colors::OFF,
        }
    }

    /// Append the root term and projected terms after the step listing.
    pub fn with_terms(mut self, value: bool) -> Self {
        self.terms = value;
        self
    }

    pub fn colored(mut self, colors: Colors) -> Self {
        self.colors = colors;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        write!(w, "{}", self.query)?;
        if self.query.repeats() {
            write!(w, " {}(repeats){}", c.dim, c.reset)?;
        }
        writeln!(w)?;

        let width = self.query.step_count().saturating_sub(1).to_string().len();
        for (idx, step) in self.query.steps().enumerate() {
            write!(w, "  {}{idx:>width$}{} ", c.dim, c.reset)?;
            self.format_step(step, w)?;
            writeln!(w)?;
        }

        if self.terms {
            self.format_terms(w)?;
        }
        Ok(())
    }

    fn format_step(&self, step: PathStep<'_>, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        let axis = step.axis();
        match axis {
            Axis::Absolute | Axis::Relative => {
                write!(w, "{}{:<AXIS_COLUMN$}{} ", c.axis, axis.as_str(), c.reset)?;
                self.format_test(step.node_test(), w)?;
                write!(w, "{}:{}", c.dim, c.reset)?;
                self.format_test(step.value_test(), w)
            }
            Axis::DescendantOrSelf | Axis::SelfAxis => {
                write!(w, "{}{}{}", c.axis, axis.as_str(), c.reset)
            }
        }
    }

    fn format_test(&self, text: Option<&str>, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        match text {
            Some(text) => write!(w, "{}{text}{}", c.term, c.reset),
            None => write!(w, "{}*{}", c.dim, c.reset),
        }
    }

    fn format_terms(&self, w: &mut impl Write) -> std::fmt::Result {
        let c = self.colors;
        writeln!(w, "terms:")?;
        writeln!(w, "  {}root{} {}", c.dim, c.reset, self.query.root_term())?;
        for term in self.query.terms() {
            writeln!(w, "  {}{term}{}", c.term, c.reset)?;
        }
        Ok(())
    }
}

impl PathQuery {
    pub fn printer(&self) -> QueryPrinter<'_> {
        QueryPrinter::new(self)
    }
}
