#![allow(clippy::disallowed_methods)]

use std::error::Error;

use connect_core::{
    Access, Category, KeyError, MemorySessionStore, Method, Outcome, RequestKey, Role, Session,
    SessionStore, guard,
};
use serde_json::json;

#[test]
fn status_endpoints_keep_their_own_vocabulary() {
    let verification = Category::Verification
        .spec()
        .mutation(&RequestKey::single("8"), Outcome::Approve);
    assert_eq!(verification.method, Method::Put);
    assert_eq!(verification.path, "/admin/verification-requests/8");
    assert_eq!(verification.body, Some(json!({ "status": "approved" })));

    let creation = Category::GroupCreation
        .spec()
        .mutation(&RequestKey::single("1"), Outcome::Approve);
    assert_eq!(creation.path, "/admin/group-creation-requests/1");
    assert_eq!(creation.body, Some(json!({ "status": "approve" })));

    let creation_reject = Category::GroupCreation
        .spec()
        .mutation(&RequestKey::single("1"), Outcome::Reject);
    assert_eq!(creation_reject.body, Some(json!({ "status": "reject" })));

    let join = Category::GroupJoin
        .spec()
        .mutation(&RequestKey::composite("7", "42"), Outcome::Reject);
    assert_eq!(join.method, Method::Put);
    assert_eq!(join.path, "/admin/group-join-requests/7/42");
    assert_eq!(join.body, Some(json!({ "status": "rejected" })));
}

#[test]
fn content_endpoints_encode_outcome_in_path() {
    let cases = [
        (Category::Jobs, Outcome::Approve, "/admin/approve/job/3"),
        (Category::Events, Outcome::Reject, "/admin/reject/event/3"),
        (Category::Campaigns, Outcome::Approve, "/admin/approve/campaign/3"),
    ];
    for (category, outcome, path) in cases {
        let mutation = category.spec().mutation(&RequestKey::single("3"), outcome);
        assert_eq!(mutation.method, Method::Post);
        assert_eq!(mutation.path, path);
        assert_eq!(mutation.body, None);
    }
}

#[test]
fn reserved_characters_in_ids_stay_inside_their_segment() {
    let join = Category::GroupJoin
        .spec()
        .mutation(&RequestKey::composite("a/b", "c?d"), Outcome::Approve);
    assert_eq!(join.path, "/admin/group-join-requests/a%2Fb/c%3Fd");

    let event = Category::Events
        .spec()
        .mutation(&RequestKey::single("9#x"), Outcome::Reject);
    assert_eq!(event.path, "/admin/reject/event/9%23x");
}

#[test]
fn list_paths_match_backend_routes() {
    assert_eq!(Category::Verification.spec().list_path, "/admin/verification-requests");
    assert_eq!(Category::GroupJoin.spec().list_path, "/admin/group-join-requests");
    assert_eq!(Category::Jobs.spec().list_path, "/admin/pending-jobs");
    assert_eq!(Category::Events.spec().list_path, "/admin/pending-events");
    assert_eq!(Category::Campaigns.spec().list_path, "/admin/pending-campaigns");
}

#[test]
fn projection_picks_display_fields() -> Result<(), Box<dyn Error>> {
    let spec = Category::GroupCreation.spec();
    let request = spec.project(&json!({
        "request_id": 1,
        "name": "CS Club",
        "description": "Weekly talks",
        "requester_name": "Ada",
        "created_at": "2024-09-01T10:15:00Z"
    }))?;

    assert_eq!(request.key, RequestKey::single("1"));
    assert_eq!(request.title, "CS Club");
    assert_eq!(request.description.as_deref(), Some("Weekly talks"));
    assert_eq!(request.requester.as_deref(), Some("Ada"));
    assert_eq!(request.submitted_display().as_deref(), Some("2024-09-01 10:15"));
    Ok(())
}

#[test]
fn projection_falls_back_when_fields_missing() -> Result<(), Box<dyn Error>> {
    let request = Category::Jobs.spec().project(&json!({ "id": 12 }))?;
    assert_eq!(request.title, "Untitled");
    assert_eq!(request.description, None);
    assert_eq!(request.requester, None);
    Ok(())
}

#[test]
fn join_requests_project_composite_keys() -> Result<(), Box<dyn Error>> {
    let request = Category::GroupJoin.spec().project(&json!({
        "group_id": 7,
        "user_id": "42",
        "group_name": "Alumni Runners",
        "user_name": "Grace"
    }))?;
    assert_eq!(request.key, RequestKey::composite("7", "42"));
    assert_eq!(request.title, "Alumni Runners");
    assert_eq!(request.requester.as_deref(), Some("Grace"));
    Ok(())
}

#[test]
fn one_unaddressable_record_fails_the_batch() {
    let records = vec![json!({ "id": 1, "title": "ok" }), json!({ "title": "no id" })];
    let result = Category::Events.spec().project_all(&records);
    assert!(matches!(result, Err(KeyError::Missing(_))));
}

#[test]
fn category_slugs_round_trip_through_from_str() {
    for category in Category::ALL {
        assert_eq!(category.slug().parse::<Category>(), Ok(category));
    }
    assert!("posts".parse::<Category>().is_err());
}

#[test]
fn guard_routes_by_session_and_role() {
    let admin = Session::new("t1", Role::Admin, "1");
    let student = Session::new("t2", Role::Student, "2");

    assert_eq!(guard(None, &[Role::Admin]), Access::Unauthenticated);
    assert_eq!(guard(Some(&admin), &[Role::Admin]), Access::Granted(admin.clone()));

    let denied = guard(Some(&student), &[Role::Admin]);
    assert_eq!(denied, Access::Forbidden { role: Role::Student });
    assert_eq!(denied.redirect_path(), Some("/dashboard"));
    assert_eq!(Access::Unauthenticated.redirect_path(), Some("/login"));
}

#[test]
fn roles_parse_case_insensitively() {
    assert_eq!("Alumni".parse::<Role>(), Ok(Role::Alumni));
    assert_eq!(" ADMIN ".parse::<Role>(), Ok(Role::Admin));
    assert!("guest".parse::<Role>().is_err());
}

#[test]
fn memory_store_saves_and_clears() {
    let store = MemorySessionStore::new();
    assert_eq!(store.load(), None);

    let session = Session::new("token", Role::Faculty, "17");
    store.save(&session);
    assert_eq!(store.load(), Some(session));

    store.clear();
    assert_eq!(store.load(), None);
}
