//! Projection of a chain onto index term references.

use pathchain_core::{ROOT_TERM_TEXT, Term};

use super::PathQuery;

impl PathQuery {
    /// One term per step that carries value-test text, in chain order.
    ///
    /// Axis structure and wildcard steps are dropped.
    pub fn terms(&self) -> Vec<Term> {
        self.steps()
            .filter_map(|step| step.value_test())
            .map(|text| Term::new(self.path_field(), text))
            .collect()
    }

    /// Anchor term for the index root, used to seed absolute matching.
    pub fn root_term(&self) -> Term {
        Term::new(self.path_field(), ROOT_TERM_TEXT)
    }
}
