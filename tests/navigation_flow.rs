//! End-to-end checks of the content store and navigator through the
//! public API, exercised the way the TUI drives them.

use std::sync::Arc;

use hoba_navigator::content::graph::overview_graph;
use hoba_navigator::content::ContentStore;
use hoba_navigator::core::navigator::{Navigator, View};

fn shared_store() -> Arc<ContentStore> {
    Arc::new(ContentStore::builtin())
}

#[test]
fn every_stage_id_has_a_nonempty_body() {
    let store = shared_store();
    assert!(!store.is_empty());
    for id in store.all_stage_ids() {
        let body = store.get_body(id).expect("listed id must resolve");
        assert!(!body.trim().is_empty(), "empty body for {id:?}");
    }
}

#[test]
fn unlisted_ids_fail_with_unknown_stage() {
    let store = shared_store();
    for bogus in ["", "Overview", "Business Problem ", "business problem"] {
        assert!(store.get_body(bogus).is_err(), "{bogus:?} should not resolve");
    }
}

#[test]
fn full_navigation_sequence() {
    let mut nav = Navigator::new(shared_store());
    assert_eq!(nav.current(), View::Overview);

    nav.select("Business Problem").unwrap();
    assert_eq!(nav.current(), View::StageDetail("Business Problem".into()));

    // Direct detail-to-detail transition, no implicit return to Overview.
    nav.select("Business Model").unwrap();
    assert_eq!(nav.current(), View::StageDetail("Business Model".into()));

    nav.reset();
    assert_eq!(nav.current(), View::Overview);
    nav.reset();
    assert_eq!(nav.current(), View::Overview);
}

#[test]
fn selection_errors_leave_the_machine_where_it_was() {
    let mut nav = Navigator::new(shared_store());
    nav.select("Business Requirements").unwrap();
    assert!(nav.select("Stage Seven").is_err());
    assert_eq!(
        nav.current(),
        View::StageDetail("Business Requirements".into())
    );
}

#[test]
fn sessions_sharing_a_store_stay_isolated() {
    let store = shared_store();
    let mut a = Navigator::new(store.clone());
    let mut b = Navigator::new(store.clone());
    let mut c = Navigator::new(store);

    a.select("Business Problem").unwrap();
    b.select("Implement the Business Change").unwrap();

    assert_eq!(a.current(), View::StageDetail("Business Problem".into()));
    assert_eq!(
        b.current(),
        View::StageDetail("Implement the Business Change".into())
    );
    assert_eq!(c.current(), View::Overview);

    a.reset();
    assert_eq!(a.current(), View::Overview);
    assert_eq!(
        b.current(),
        View::StageDetail("Implement the Business Change".into())
    );

    c.select("Business Motivation").unwrap();
    assert_eq!(a.current(), View::Overview);
    assert_eq!(c.current(), View::StageDetail("Business Motivation".into()));
}

#[test]
fn overview_graph_agrees_with_the_store() {
    let store = shared_store();
    let graph = overview_graph();

    let stage_ids: Vec<_> = graph.stage_ids().collect();
    assert_eq!(stage_ids, store.all_stage_ids());
    assert_eq!(stage_ids.len(), 6);

    let links: Vec<_> = graph.cross_cutting_links().collect();
    assert_eq!(links.len(), 2);
    for (from, to) in links {
        assert!(!store.contains(from), "cross-cutting {from:?} is not a stage");
        assert!(store.contains(to), "dashed edge dangles at {to:?}");
    }
}

#[test]
fn selecting_every_stage_in_order_round_trips() {
    let store = shared_store();
    let mut nav = Navigator::new(store.clone());
    for id in store.all_stage_ids() {
        nav.select(id).unwrap();
        assert_eq!(nav.current(), View::StageDetail(id.into()));
        assert_eq!(nav.selected_body(), Some(store.get_body(id).unwrap()));
    }
    nav.reset();
    assert_eq!(nav.current(), View::Overview);
    assert_eq!(nav.selected_body(), None);
}
