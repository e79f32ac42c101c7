use super::*;

use crate::util::storage::MemoryStore;

// =============================================================
// Session::read
// =============================================================

#[test]
fn read_empty_store_is_anonymous() {
    let store = MemoryStore::new();
    let session = Session::read(&store);
    assert_eq!(session, Session::default());
    assert!(!session.is_valid());
    assert_eq!(session.decision(), AuthDecision::Anonymous);
}

#[test]
fn read_token_and_user_is_authenticated() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, r#"{"id":7,"name":"Ann","email":"ann@example.com"}"#);

    let session = Session::read(&store);
    assert!(session.is_valid());
    assert_eq!(session.decision(), AuthDecision::Authenticated);

    let user = session.user.expect("user record should parse");
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ann");
    assert_eq!(user.email, "ann@example.com");
}

#[test]
fn read_token_without_user_is_anonymous() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");

    let session = Session::read(&store);
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.user, None);
    assert_eq!(session.decision(), AuthDecision::Anonymous);
}

#[test]
fn read_user_without_token_is_anonymous() {
    let store = MemoryStore::new();
    store.set(USER_KEY, r#"{"name":"Ann"}"#);

    let session = Session::read(&store);
    assert_eq!(session.token, None);
    assert!(session.user.is_some());
    assert_eq!(session.decision(), AuthDecision::Anonymous);
}

#[test]
fn read_malformed_user_record_is_anonymous_not_fatal() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, "not json");

    let session = Session::read(&store);
    assert_eq!(session.user, None);
    assert_eq!(session.decision(), AuthDecision::Anonymous);
    // The token itself is left in place; only the parse result degrades.
    assert_eq!(session.token.as_deref(), Some("abc"));
}

#[test]
fn read_non_object_user_record_is_anonymous() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, "\"just a string\"");

    let session = Session::read(&store);
    assert_eq!(session.user, None);
    assert_eq!(session.decision(), AuthDecision::Anonymous);
}

#[test]
fn read_partial_user_record_fills_defaults() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, r#"{"name":"Ann"}"#);

    let session = Session::read(&store);
    let user = session.user.expect("partial record should still parse");
    assert_eq!(user.name, "Ann");
    assert_eq!(user.id, 0);
    assert_eq!(user.email, "");
}

#[test]
fn read_user_record_ignores_unknown_fields() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(
        USER_KEY,
        r#"{"id":1,"name":"Ann","email":"a@b.c","avatar":"x.png"}"#,
    );

    let session = Session::read(&store);
    assert!(session.is_valid());
}

// =============================================================
// clear_session
// =============================================================

#[test]
fn clear_session_removes_both_keys() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set(USER_KEY, r#"{"name":"Ann"}"#);

    clear_session(&store);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn clear_session_on_empty_store_is_noop() {
    let store = MemoryStore::new();
    clear_session(&store);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn clear_session_leaves_unrelated_keys_alone() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc");
    store.set("theme", "dark");

    clear_session(&store);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}
