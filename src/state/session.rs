//! Session evidence read from origin-scoped storage.
//!
//! DESIGN
//! ======
//! Storage access goes through the `SessionStore` capability so the decision
//! core never depends on a browser backend. A session is valid only when the
//! token and the user record are both present; a malformed user record is
//! downgraded to signed-out instead of failing page initialization.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Storage key holding the opaque session token.
pub const TOKEN_KEY: &str = "session_token";
/// Storage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// String key-value store scoped to the site origin.
///
/// The browser implementation wraps `localStorage`; tests and non-browser
/// builds use `MemoryStore`.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// User record persisted by the login flow.
///
/// Mirrors the login response payload. Unknown fields are ignored and
/// missing fields default, so records stored by older page versions keep
/// deserializing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Client-held evidence of authentication.
///
/// Presence of both halves is a precondition of authenticated rendering,
/// not proof; no server-side validation happens here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<StoredUser>,
}

/// Whether the current page load is treated as signed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthDecision {
    Authenticated,
    Anonymous,
}

impl Session {
    /// Read both persisted values once, at page-load initialization.
    ///
    /// Never fails: a missing token or a missing/unparseable user record
    /// yields the corresponding `None`.
    pub fn read<S: SessionStore>(store: &S) -> Self {
        let token = store.get(TOKEN_KEY);
        let user = store.get(USER_KEY).and_then(|raw| {
            match serde_json::from_str::<StoredUser>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("stored user record failed to parse, treating as signed out: {err}");
                    None
                }
            }
        });
        Self { token, user }
    }

    /// A session is valid only when both halves are present.
    pub fn is_valid(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Auth decision for this page load. Evaluated once; later storage
    /// writes do not re-enter the pipeline until the next navigation.
    pub fn decision(&self) -> AuthDecision {
        if self.is_valid() {
            AuthDecision::Authenticated
        } else {
            AuthDecision::Anonymous
        }
    }
}

/// Remove both persisted session values.
///
/// Logout calls this unconditionally; clearing an already-empty store is a
/// no-op.
pub fn clear_session<S: SessionStore>(store: &S) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}
