//! Access decision for protected pages.
//!
//! The check runs before any DOM mutation so an anonymous visitor never
//! observes protected content, even momentarily.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::page::{LOGIN_PAGE, PageClass};
use super::session::Session;

/// Outcome of the access check for the current page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// Proceed with header rendering and CTA binding.
    Continue,
    /// Leave the page immediately; carries the redirect target. Nothing
    /// else in the pipeline runs.
    RedirectToLogin(&'static str),
}

/// Protected page plus an invalid session redirects; everything else
/// proceeds.
pub fn check(class: PageClass, session: &Session) -> GuardAction {
    match class {
        PageClass::Protected if !session.is_valid() => GuardAction::RedirectToLogin(LOGIN_PAGE),
        PageClass::Protected | PageClass::PublicWithHeader | PageClass::Other => {
            GuardAction::Continue
        }
    }
}
