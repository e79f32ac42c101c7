//! Declarative description of the header slot contents.
//!
//! DESIGN
//! ======
//! The `(AuthDecision, PageClass)` table below is the whole branching logic
//! of header presentation; `components::header` only applies the resulting
//! spec. Keeping the decision pure lets the table be tested without a DOM.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use super::page::{
    LANDING_PAGE, LOGIN_PAGE, MY_APPOINTMENTS_PAGE, MY_PETS_PAGE, PROFILE_PAGE, PageClass,
    REGISTER_PAGE,
};
use super::session::AuthDecision;

/// Element id given to the rendered logout control.
pub const LOGOUT_BUTTON_ID: &str = "logout-button";

/// A single navigation link in the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// What the header slot should contain for this page load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderSpec {
    /// Signed-in navigation plus the logout control.
    Member { links: Vec<NavLink> },
    /// Marketing links plus the login / signup controls.
    Guest {
        links: Vec<NavLink>,
        login: NavLink,
        signup: NavLink,
    },
    /// Clear the slot.
    Empty,
}

/// Decide the header contents from auth state and page class.
///
/// Total over both enums. `(Anonymous, Protected)` cannot be reached once
/// the access guard has run, but still maps to `Empty` rather than
/// panicking.
pub fn header_spec(decision: AuthDecision, class: PageClass) -> HeaderSpec {
    match (decision, class) {
        (AuthDecision::Authenticated, _) => HeaderSpec::Member {
            links: vec![
                NavLink { label: "Home", href: LANDING_PAGE },
                NavLink { label: "My Pets", href: MY_PETS_PAGE },
                NavLink { label: "My Appointments", href: MY_APPOINTMENTS_PAGE },
                NavLink { label: "Profile", href: PROFILE_PAGE },
            ],
        },
        (AuthDecision::Anonymous, PageClass::PublicWithHeader) => HeaderSpec::Guest {
            links: vec![
                NavLink { label: "Services", href: "landing_page.html#services" },
                NavLink { label: "Pricing", href: "landing_page.html#pricing" },
            ],
            login: NavLink { label: "Log In", href: LOGIN_PAGE },
            signup: NavLink { label: "Sign Up", href: REGISTER_PAGE },
        },
        (AuthDecision::Anonymous, PageClass::Protected | PageClass::Other) => HeaderSpec::Empty,
    }
}
