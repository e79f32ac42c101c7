//! Page identity and classification for the site's static pages.
//!
//! DESIGN
//! ======
//! Classification is a total function of the final path segment: protected
//! pages are checked first, then public pages that carry the auth header,
//! and everything else falls through to `Other`. The two membership sets
//! are disjoint; checking protected first is the deliberate tie-break.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Page served when the location path has no file segment.
pub const LANDING_PAGE: &str = "landing_page.html";
/// Login page; redirect target for anonymous visits to protected pages.
pub const LOGIN_PAGE: &str = "login.html";
/// Registration page.
pub const REGISTER_PAGE: &str = "register.html";
/// Appointment booking page; CTA target for signed-in visitors.
pub const BOOK_APPOINTMENT_PAGE: &str = "book_appointment.html";
/// Pet registration page.
pub const ADD_PET_PAGE: &str = "add_pet.html";
/// Pet list page.
pub const MY_PETS_PAGE: &str = "my_pets.html";
/// Appointment list page.
pub const MY_APPOINTMENTS_PAGE: &str = "my_appointments.html";
/// Account profile page.
pub const PROFILE_PAGE: &str = "profile.html";

/// Pages that require a signed-in visitor.
pub const PROTECTED_PAGES: [&str; 5] = [
    ADD_PET_PAGE,
    MY_PETS_PAGE,
    BOOK_APPOINTMENT_PAGE,
    MY_APPOINTMENTS_PAGE,
    PROFILE_PAGE,
];

/// Public pages that still render the auth header when signed out.
pub const PUBLIC_PAGES_WITH_HEADER: [&str; 3] = [LANDING_PAGE, LOGIN_PAGE, REGISTER_PAGE];

/// Access class of a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageClass {
    /// Requires a session; anonymous visitors are redirected to login.
    Protected,
    /// Public page that renders the signed-out header controls.
    PublicWithHeader,
    /// Any other page; the header slot is cleared when signed out.
    #[default]
    Other,
}

/// Extract the page identity from a raw location path.
///
/// The identity is the final `/` segment; an empty segment (site root,
/// trailing slash) maps to the landing page.
pub fn page_identity(path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or("");
    if last.is_empty() {
        LANDING_PAGE.to_owned()
    } else {
        last.to_owned()
    }
}

/// Classify a page identity. Protected membership wins over public.
pub fn classify(identity: &str) -> PageClass {
    if PROTECTED_PAGES.contains(&identity) {
        PageClass::Protected
    } else if PUBLIC_PAGES_WITH_HEADER.contains(&identity) {
        PageClass::PublicWithHeader
    } else {
        PageClass::Other
    }
}
