use super::*;

#[test]
fn logout_endpoint_path() {
    assert_eq!(LOGOUT_ENDPOINT, "/api/logout");
}

#[test]
fn server_logout_stays_disabled() {
    // Flip only once the backend grows real server-side sessions; the
    // clear-and-redirect steps never depend on it either way.
    assert!(!SERVER_LOGOUT_ENABLED);
}
