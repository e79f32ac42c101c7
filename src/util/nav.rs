//! Location helpers: current path and full-page navigation.
//!
//! Navigation here is a document-level redirect, not client-side routing —
//! the site is multi-page, and every transition is a fresh load.

/// Raw location path of the current document, or empty when no window is
/// available.
#[cfg(feature = "csr")]
pub fn current_path() -> String {
    web_sys::window()
        .map(|w| w.location())
        .and_then(|loc| loc.pathname().ok())
        .unwrap_or_default()
}

#[cfg(not(feature = "csr"))]
pub fn current_path() -> String {
    String::new()
}

/// Navigate the document to `href`. Terminal for the current page load.
#[cfg(feature = "csr")]
pub fn redirect_to(href: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(href);
    }
}

#[cfg(not(feature = "csr"))]
pub fn redirect_to(_href: &str) {}
