#![allow(clippy::disallowed_methods)]

use connect_core::{Category, Level, LoadState, Outcome, PendingRequest, QueueView, RequestKey};

fn request(id: &str, title: &str) -> PendingRequest {
    PendingRequest::new(RequestKey::single(id), title)
}

fn join_request(group: &str, user: &str) -> PendingRequest {
    PendingRequest::new(RequestKey::composite(group, user), "Chess Society")
}

#[test]
fn new_view_is_loading_not_empty() {
    let view = QueueView::new(Category::Jobs);
    assert!(view.is_loading());
    assert!(!view.is_empty());
    assert_eq!(view.len(), 0);
}

#[test]
fn failed_load_replaces_list_with_error() {
    let mut view = QueueView::new(Category::Events);
    view.finish_load(Err("Could not reach the server".to_string()));

    assert_eq!(
        view.state(),
        &LoadState::Failed("Could not reach the server".to_string())
    );
    assert!(!view.is_loading());
    assert!(view.rows().is_empty());
}

#[test]
fn successful_decision_removes_exactly_one_row() {
    let mut view = QueueView::with_rows(
        Category::GroupCreation,
        vec![request("1", "CS Club"), request("2", "Robotics"), request("3", "Drama")],
    );

    assert!(view.begin_decision(&RequestKey::single("2")));
    let notice = view.finish_decision(
        &RequestKey::single("2"),
        Outcome::Approve,
        Ok(Some("Approved".to_string())),
    );

    assert_eq!(notice.level, Level::Success);
    assert_eq!(notice.message, "Approved");
    let remaining: Vec<_> = view.rows().iter().map(|r| r.key.to_string()).collect();
    assert_eq!(remaining, vec!["1", "3"]);
}

#[test]
fn success_without_server_message_uses_default() {
    let mut view = QueueView::with_rows(Category::Jobs, vec![request("5", "Backend Engineer")]);
    let notice = view.finish_decision(&RequestKey::single("5"), Outcome::Reject, Ok(None));
    assert_eq!(notice.message, "Request rejected");
}

#[test]
fn failed_decision_leaves_rows_unchanged() {
    let rows = vec![request("1", "CS Club"), request("2", "Robotics")];
    let mut view = QueueView::with_rows(Category::GroupCreation, rows.clone());

    assert!(view.begin_decision(&RequestKey::single("1")));
    let notice = view.finish_decision(
        &RequestKey::single("1"),
        Outcome::Reject,
        Err("Group name already taken".to_string()),
    );

    assert!(notice.is_error());
    assert_eq!(notice.message, "Group name already taken");
    assert_eq!(view.rows(), rows.as_slice());
    assert!(!view.is_in_flight(&RequestKey::single("1")));
}

#[test]
fn removing_last_row_brings_back_empty_state() {
    let mut view = QueueView::with_rows(Category::GroupCreation, vec![request("1", "CS Club")]);
    assert!(!view.is_empty());

    view.begin_decision(&RequestKey::single("1"));
    view.finish_decision(&RequestKey::single("1"), Outcome::Approve, Ok(None));

    assert!(view.is_empty());
    assert_eq!(view.state(), &LoadState::Ready(Vec::new()));
}

#[test]
fn a_row_is_removed_at_most_once() {
    let mut view = QueueView::with_rows(Category::Jobs, vec![request("1", "a"), request("2", "b")]);
    assert!(view.remove(&RequestKey::single("1")));
    assert!(!view.remove(&RequestKey::single("1")));
    assert_eq!(view.len(), 1);
}

#[test]
fn duplicate_decisions_are_refused_while_in_flight() {
    let mut view = QueueView::with_rows(Category::Jobs, vec![request("1", "a")]);
    assert!(view.begin_decision(&RequestKey::single("1")));
    assert!(!view.begin_decision(&RequestKey::single("1")));
    assert!(view.is_in_flight(&RequestKey::single("1")));

    // unknown rows never start a decision
    assert!(!view.begin_decision(&RequestKey::single("99")));
}

#[test]
fn composite_keys_do_not_collide_with_single_keys() {
    let mut joins = QueueView::with_rows(
        Category::GroupJoin,
        vec![join_request("1", "2"), join_request("1", "3")],
    );
    let mut creations = QueueView::with_rows(
        Category::GroupCreation,
        vec![request("1", "CS Club"), request("1:2", "Odd id")],
    );

    assert!(!joins.remove(&RequestKey::single("1")));
    assert!(!joins.remove(&RequestKey::single("1:2")));
    assert_eq!(joins.len(), 2);

    assert!(joins.remove(&RequestKey::composite("1", "2")));
    assert_eq!(joins.rows()[0].key, RequestKey::composite("1", "3"));

    assert!(!creations.remove(&RequestKey::composite("1", "2")));
    assert_eq!(creations.len(), 2);
}

#[test]
fn refresh_during_decision_keeps_row_busy() {
    let key = RequestKey::single("4");
    let mut view = QueueView::with_rows(Category::Events, vec![request("4", "Homecoming")]);
    assert!(view.begin_decision(&key));

    view.start_loading();
    assert!(view.is_loading());
    view.finish_load(Ok(vec![request("4", "Homecoming")]));

    assert_eq!(view.len(), 1);
    assert!(view.is_in_flight(&key));
    assert!(!view.begin_decision(&key));

    view.finish_decision(&key, Outcome::Approve, Ok(None));
    assert!(!view.is_in_flight(&key));
    assert!(view.is_empty());
}
