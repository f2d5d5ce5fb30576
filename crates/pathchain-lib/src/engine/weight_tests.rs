use std::cell::RefCell;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pathchain_core::Axis;

use super::*;
use crate::{Error, PathQuery};

struct Segment {
    docs: Vec<DocId>,
}

struct Docs(std::vec::IntoIter<DocId>);

impl MatchIterator for Docs {
    fn next_doc(&mut self) -> Option<DocId> {
        self.0.next()
    }
}

#[derive(Default)]
struct RecordingFactory {
    seen: RefCell<Vec<String>>,
}

impl MatcherFactory<Segment> for RecordingFactory {
    type Iter = Docs;
    type Error = String;

    fn create(&self, request: MatchRequest<'_, Segment>) -> Result<Docs, String> {
        self.seen.borrow_mut().push(format!(
            "{} field={} repeats={} resolver={}",
            request.query,
            request.field,
            request.repeats,
            request.resolver.is_some()
        ));
        Ok(Docs(request.segment.docs.clone().into_iter()))
    }
}

struct ClosedSegmentFactory;

impl MatcherFactory<str> for ClosedSegmentFactory {
    type Iter = Docs;
    type Error = &'static str;

    fn create(&self, _request: MatchRequest<'_, str>) -> Result<Docs, &'static str> {
        Err("segment closed")
    }
}

#[derive(Default)]
struct CountingResolver {
    calls: AtomicUsize,
}

impl NameResolver for CountingResolver {
    fn resolve(&self, qname: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        qname
            .strip_prefix("cm:")
            .map(|local| format!("{{http://www.alfresco.org/model/content/1.0}}{local}"))
    }
}

fn folder_query() -> PathQuery {
    let mut query = PathQuery::new();
    query.append_step(Axis::Absolute, Some("app"), Some("company_home"));
    query.append_step(Axis::DescendantOrSelf, None, None);
    query.append_step(Axis::Relative, Some("cm"), Some("folder"));
    query
}

fn drain(mut iter: impl MatchIterator) -> Vec<DocId> {
    std::iter::from_fn(|| iter.next_doc()).collect()
}

#[test]
fn scorer_forwards_chain_and_flags() {
    let mut query = folder_query();
    query.set_repeats(true);
    let weight = query.create_weight(RecordingFactory::default());

    let docs = drain(weight.scorer(&Segment { docs: vec![3, 7] }).unwrap());

    assert_eq!(docs, vec![3, 7]);
    insta::assert_snapshot!(
        weight.factory().seen.borrow().join("\n"),
        @"PATH:/{app}:company_home//cm:folder field=PATH repeats=true resolver=false"
    );
}

#[test]
fn scorer_called_per_segment() {
    let query = folder_query();
    let weight = query.create_weight(RecordingFactory::default());

    for docs in [vec![1], vec![], vec![2, 4]] {
        weight.scorer(&Segment { docs }).unwrap();
    }

    assert_eq!(weight.factory().seen.borrow().len(), 3);
}

#[test]
fn scorer_uses_configured_field() {
    let mut query = folder_query();
    query.set_path_field("QNAME_PATH");
    let weight = query.create_weight(RecordingFactory::default());

    weight.scorer(&Segment { docs: vec![] }).unwrap();

    assert!(weight.factory().seen.borrow()[0].contains("field=QNAME_PATH"));
}

#[test]
fn scorer_propagates_factory_error() {
    let query = folder_query();
    let weight = query.create_weight(ClosedSegmentFactory);

    assert_eq!(weight.scorer("segment-0").err(), Some("segment closed"));
}

#[test]
fn resolver_is_forwarded_not_called() {
    let resolver = Arc::new(CountingResolver::default());
    let mut query = PathQuery::new().with_resolver(resolver.clone());
    query.append_step(Axis::Absolute, Some("app"), Some("company_home"));
    let _ = query.to_string();
    let _ = query.terms();

    let weight = query.create_weight(RecordingFactory::default());
    weight.scorer(&Segment { docs: vec![] }).unwrap();

    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    assert!(weight.factory().seen.borrow()[0].ends_with("resolver=true"));

    let handle = query.resolver().unwrap();
    assert_eq!(
        handle.resolve("cm:folder").as_deref(),
        Some("{http://www.alfresco.org/model/content/1.0}folder")
    );
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn normalization_is_neutral() {
    let query = folder_query();
    let mut weight = query.create_weight(ClosedSegmentFactory);

    weight.normalize(0.25, 4.0);

    assert_eq!(weight.value_for_normalization(), 1.0);
    assert_eq!(weight.query(), &query);
}

#[test]
fn explain_is_unsupported() {
    let query = folder_query();
    let weight = query.create_weight(ClosedSegmentFactory);

    let err = weight.explain("segment-0", 0).unwrap_err();

    assert_eq!(err, Error::Unsupported(Capability::Explain));
    assert_eq!(
        err.to_string(),
        "score explanation is not supported for structural path queries"
    );
}

#[test]
fn extract_terms_is_unsupported() {
    let query = folder_query();
    let weight = query.create_weight(ClosedSegmentFactory);
    let mut terms = BTreeSet::new();

    let err = weight.extract_terms(&mut terms).unwrap_err();

    assert_eq!(err, Error::Unsupported(Capability::ExtractTerms));
    assert_eq!(
        err.to_string(),
        "term extraction is not supported for structural path queries"
    );
    assert!(terms.is_empty());
}
