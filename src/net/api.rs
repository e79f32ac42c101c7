//! REST helpers for the site's API.
//!
//! Browser builds make real HTTP calls via `gloo-net`; elsewhere the helpers
//! are inert stubs. Callers never get panics: failures degrade to logged
//! no-ops.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Server-side session invalidation endpoint.
pub const LOGOUT_ENDPOINT: &str = "/api/logout";

/// Whether logout should attempt the server invalidation call.
///
/// The endpoint is a placeholder today (no server-side session exists), so
/// the call stays disabled; client-side logout is correct without it.
pub const SERVER_LOGOUT_ENABLED: bool = false;

/// Best-effort `POST /api/logout`. Never required for logout correctness
/// and never awaited by the caller.
pub async fn logout() {
    #[cfg(feature = "csr")]
    {
        match gloo_net::http::Request::post(LOGOUT_ENDPOINT).send().await {
            Ok(resp) if resp.ok() => {}
            Ok(resp) => log::warn!("server logout returned status {}", resp.status()),
            Err(err) => log::warn!("server logout call failed: {err}"),
        }
    }
}
