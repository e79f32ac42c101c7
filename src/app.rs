//! Page-load pipeline: read session, classify page, guard, render, bind CTA.
//!
//! SYSTEM CONTEXT
//! ==============
//! `plan_page_load` is the pure half — it decides everything a page load
//! will do. `boot` is the browser half: invoked once per page by the WASM
//! entry point after the document has parsed, it applies the plan and
//! nothing else. A redirect plan terminates the load before any DOM write.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::state::guard::{self, GuardAction};
use crate::state::header::{self, HeaderSpec};
use crate::state::page;
use crate::state::session::Session;
use crate::util::cta;

/// Everything a single page load does, decided up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageLoad {
    /// Terminal: navigate away before touching the DOM.
    Redirect(&'static str),
    /// Render the header variant and point the CTA (if present) somewhere.
    Render {
        header: HeaderSpec,
        cta_href: &'static str,
    },
}

/// Decide the whole page load from the session and the page identity.
pub fn plan_page_load(session: &Session, identity: &str) -> PageLoad {
    let class = page::classify(identity);
    match guard::check(class, session) {
        GuardAction::RedirectToLogin(target) => PageLoad::Redirect(target),
        GuardAction::Continue => {
            let decision = session.decision();
            PageLoad::Render {
                header: header::header_spec(decision, class),
                cta_href: cta::cta_target(decision),
            }
        }
    }
}

/// Run the pipeline once against the real browser environment.
#[cfg(feature = "csr")]
pub fn boot() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let store = crate::util::storage::LocalSessionStore;
    let session = Session::read(&store);
    let identity = page::page_identity(&crate::util::nav::current_path());

    match plan_page_load(&session, &identity) {
        PageLoad::Redirect(target) => crate::util::nav::redirect_to(target),
        PageLoad::Render { header: spec, cta_href } => {
            crate::components::header::mount_header(&spec);
            cta::bind_cta(cta_href);
        }
    }
}

/// Non-browser builds have no page to initialize.
#[cfg(not(feature = "csr"))]
pub fn boot() {}
