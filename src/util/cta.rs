//! Hero call-to-action retargeting.
//!
//! Runs independently of the header pipeline; a page without the CTA anchor
//! is a no-op.

#[cfg(test)]
#[path = "cta_test.rs"]
mod cta_test;

use crate::state::page::{BOOK_APPOINTMENT_PAGE, LOGIN_PAGE};
use crate::state::session::AuthDecision;

/// Element id of the hero booking CTA anchor.
pub const CTA_ID: &str = "hero-prenota-button";

/// Signed-in visitors go straight to booking; everyone else to login.
pub fn cta_target(decision: AuthDecision) -> &'static str {
    match decision {
        AuthDecision::Authenticated => BOOK_APPOINTMENT_PAGE,
        AuthDecision::Anonymous => LOGIN_PAGE,
    }
}

/// Rewrite the CTA anchor's `href`, if the element is on this page.
#[cfg(feature = "csr")]
pub fn bind_cta(href: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id(CTA_ID) {
        let _ = el.set_attribute("href", href);
    }
}

#[cfg(not(feature = "csr"))]
pub fn bind_cta(_href: &str) {}
