//! Header slot rendering.
//!
//! Thin by construction: all branching lives in `state::header`; this module
//! mounts whatever the spec says into the `header-auth-buttons` container.
//! Re-mounting an identical spec replaces the slot with identical content.

use leptos::prelude::*;

use crate::state::header::{HeaderSpec, LOGOUT_BUTTON_ID, NavLink};

/// Element id of the shared header slot.
pub const HEADER_SLOT_ID: &str = "header-auth-buttons";

/// Mount the header spec into the slot, replacing its current content.
/// Pages without the slot are left untouched.
#[cfg(feature = "csr")]
pub fn mount_header(spec: &HeaderSpec) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(container) = document.get_element_by_id(HEADER_SLOT_ID) else {
        return;
    };
    // Replace, don't accumulate: the slot may hold static placeholder markup
    // or the output of an earlier mount.
    container.set_inner_html("");
    if matches!(spec, HeaderSpec::Empty) {
        return;
    }
    let Ok(host) = container.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let spec = spec.clone();
    leptos::mount::mount_to(host, move || view! { <HeaderNav spec=spec/> }).forget();
}

#[cfg(not(feature = "csr"))]
pub fn mount_header(_spec: &HeaderSpec) {}

/// Header navigation for the decided spec.
#[component]
pub fn HeaderNav(spec: HeaderSpec) -> impl IntoView {
    match spec {
        HeaderSpec::Member { links } => view! { <MemberNav links=links/> }.into_any(),
        HeaderSpec::Guest { links, login, signup } => {
            view! { <GuestNav links=links login=login signup=signup/> }.into_any()
        }
        HeaderSpec::Empty => ().into_any(),
    }
}

/// Signed-in navigation: site links plus the logout control.
#[component]
fn MemberNav(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <div class="header-nav__links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a class="header-nav__link" href=link.href>
                            {link.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <button id=LOGOUT_BUTTON_ID class="btn header-nav__logout" on:click=on_logout>
            "Logout"
        </button>
    }
}

/// Signed-out navigation: marketing links plus the login / signup controls.
#[component]
fn GuestNav(links: Vec<NavLink>, login: NavLink, signup: NavLink) -> impl IntoView {
    view! {
        <div class="header-nav__links">
            {links
                .into_iter()
                .map(|link| {
                    view! {
                        <a class="header-nav__link" href=link.href>
                            {link.label}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <div class="header-nav__actions">
            <a id="login-button-header" class="btn btn--primary" href=login.href>
                {login.label}
            </a>
            <a id="signup-button-header" class="btn" href=signup.href>
                {signup.label}
            </a>
        </div>
    }
}

/// Logout control handler.
///
/// The server call is spawned and never awaited, so the clear-and-redirect
/// steps below it run on every path regardless of network outcome.
#[cfg(feature = "csr")]
fn on_logout(_ev: leptos::ev::MouseEvent) {
    use crate::net::api;
    use crate::state::page::LOGIN_PAGE;
    use crate::state::session::clear_session;
    use crate::util::nav::redirect_to;
    use crate::util::storage::LocalSessionStore;

    if api::SERVER_LOGOUT_ENABLED {
        leptos::task::spawn_local(async {
            api::logout().await;
        });
    }
    clear_session(&LocalSessionStore);
    redirect_to(LOGIN_PAGE);
}

#[cfg(not(feature = "csr"))]
fn on_logout(_ev: leptos::ev::MouseEvent) {}
