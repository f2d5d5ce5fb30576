//! Property tests for the chain construction protocol and parse/render agreement.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use pathchain_core::{Axis, FieldPosition, UNIT_SIZE};
use proptest::prelude::*;

use super::{AppendOutcome, PathQuery};
use crate::Error;
use crate::parser::parse;

fn arb_axis() -> impl Strategy<Value = Axis> {
    proptest::sample::select(Axis::ALL.to_vec())
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[a-z_]{1,8}")
}

fn arb_position() -> impl Strategy<Value = FieldPosition> {
    (arb_axis(), arb_text()).prop_map(|(axis, text)| FieldPosition { axis, text })
}

fn arb_unit() -> impl Strategy<Value = Vec<FieldPosition>> {
    (arb_axis(), arb_text(), arb_text()).prop_map(|(axis, node, value)| {
        FieldPosition::unit(axis, node.as_deref(), value.as_deref()).to_vec()
    })
}

fn arb_units() -> impl Strategy<Value = Vec<Vec<FieldPosition>>> {
    proptest::collection::vec(arb_unit(), 0..10)
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,5}(\\.[a-z0-9]{1,3})?"
}

fn arb_local() -> impl Strategy<Value = String> {
    prop_oneof![arb_name(), Just("*".to_owned())]
}

fn arb_prefix() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_name(),
        Just("*".to_owned()),
        "\\{[a-z:/.]{0,10}\\}",
    ]
}

fn arb_step_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_owned()),
        arb_local(),
        (arb_prefix(), arb_local()).prop_map(|(prefix, local)| format!("{prefix}:{local}")),
    ]
}

/// Source text following the path-expression grammar.
fn arb_expression() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        arb_step_text().prop_map(|step| format!("/{step}")),
        Just("/.".to_owned()),
        Just("//".to_owned()),
        arb_step_text().prop_map(|step| format!("//{step}")),
        Just("//.".to_owned()),
        Just(".".to_owned()),
    ];
    proptest::collection::vec(segment, 1..12).prop_map(|segments| segments.concat())
}

fn hash_of(query: &PathQuery) -> u64 {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    hasher.finish()
}

fn built_by_appends(units: &[Vec<FieldPosition>]) -> PathQuery {
    let mut query = PathQuery::new();
    for unit in units {
        query.append_query(unit).unwrap();
    }
    query
}

proptest! {
    #[test]
    fn set_query_roundtrips(positions in arb_units().prop_map(|u| u.concat())) {
        let mut query = PathQuery::new();
        query.set_query(positions.clone()).unwrap();
        prop_assert_eq!(query.positions(), positions.as_slice());
    }

    #[test]
    fn set_query_rejects_unaligned(
        positions in arb_units().prop_map(|u| u.concat()),
        extra in arb_position(),
    ) {
        let mut positions = positions;
        positions.push(extra);
        let mut query = PathQuery::new();
        let err = query.set_query(positions.clone()).unwrap_err();
        prop_assert_eq!(err, Error::InvalidChainLength { len: positions.len() });
        prop_assert!(query.is_empty());
    }

    #[test]
    fn append_rejects_wrong_width(unit in proptest::collection::vec(arb_position(), 0..6)) {
        prop_assume!(unit.len() != UNIT_SIZE);
        let mut query = PathQuery::new();
        let err = query.append_query(&unit).unwrap_err();
        prop_assert_eq!(err, Error::InvalidUnitSize { len: unit.len() });
    }

    #[test]
    fn append_outcome_matches_growth(units in arb_units()) {
        let mut query = PathQuery::new();
        for unit in &units {
            let before = query.clone();
            match query.append_query(unit).unwrap() {
                AppendOutcome::Appended => {
                    prop_assert_eq!(query.len(), before.len() + UNIT_SIZE);
                    prop_assert_eq!(&query.positions()[before.len()..], unit.as_slice());
                }
                AppendOutcome::Rejected(_) => {
                    prop_assert_eq!(&query, &before);
                }
            }
            prop_assert_eq!(query.len() % UNIT_SIZE, 0);
        }
    }

    #[test]
    fn appends_never_stack_self_links(units in arb_units()) {
        let query = built_by_appends(&units);
        let steps: Vec<_> = query.steps().collect();
        for pair in steps.windows(2) {
            prop_assert!(!(pair[0].axis().links_self() && pair[1].axis().links_self()));
        }
    }

    #[test]
    fn canonicalization_is_idempotent(positions in arb_units().prop_map(|u| u.concat())) {
        let mut once = PathQuery::new();
        once.set_query(positions).unwrap();
        once.remove_descendant_and_self();

        let mut twice = once.clone();
        twice.remove_descendant_and_self();

        prop_assert_eq!(&once, &twice);
        prop_assert!(once.steps().last().is_none_or(|s| !s.axis().links_self()));
    }

    #[test]
    fn canonicalization_keeps_a_prefix(positions in arb_units().prop_map(|u| u.concat())) {
        let mut query = PathQuery::new();
        query.set_query(positions.clone()).unwrap();
        query.remove_descendant_and_self();
        prop_assert!(positions.starts_with(query.positions()));
    }

    #[test]
    fn rendering_depends_only_on_contents(units in arb_units()) {
        let appended = built_by_appends(&units);

        let mut replaced = PathQuery::new();
        replaced.append_step(Axis::SelfAxis, None, None);
        replaced.set_query(appended.positions().to_vec()).unwrap();

        prop_assert_eq!(appended.to_string(), replaced.to_string());
        prop_assert_eq!(&appended, &replaced);
        prop_assert_eq!(hash_of(&appended), hash_of(&replaced));
    }

    #[test]
    fn equality_tracks_repeats(units in arb_units(), repeats in any::<bool>()) {
        let a = built_by_appends(&units);
        let mut b = a.clone();
        b.set_repeats(repeats);
        prop_assert_eq!(a == b, !repeats);
    }

    #[test]
    fn terms_follow_value_tests(positions in arb_units().prop_map(|u| u.concat())) {
        let mut query = PathQuery::new();
        query.set_query(positions).unwrap();

        let texts: Vec<_> = query.terms().into_iter().map(|t| t.text).collect();
        let expected: Vec<_> = query
            .steps()
            .filter_map(|s| s.value_test().map(str::to_owned))
            .collect();
        prop_assert_eq!(texts, expected);
    }

    #[test]
    fn parsed_chains_parse_back(source in arb_expression()) {
        if let Ok(first) = parse(&source) {
            let rendered = first.query.to_string();
            let second = parse(&rendered)
                .map_err(|e| TestCaseError::fail(format!("{rendered} from {source}: {e}")))?;
            prop_assert_eq!(second.query, first.query);
            prop_assert!(second.dropped.is_empty());
        }
    }
}
