//! # petcare-auth
//!
//! Client-side access control and header glue for the PetCare static site.
//! Compiled to WASM and loaded by every page; on each page load it reads the
//! stored session, blocks anonymous visits to protected pages, renders the
//! correct header-navigation variant into the shared header slot, and
//! retargets the hero call-to-action.
//!
//! The decision core (`state`, [`app::plan_page_load`]) is pure and tested
//! natively with plain `cargo test`; browser access (storage, location, DOM
//! mounting, network) is gated behind the `csr` feature with inert stubs
//! elsewhere.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point. Pages load the module at the end of the body, so the
/// document has already parsed when this runs.
#[cfg(feature = "csr")]
#[wasm_bindgen(start)]
fn start() {
    app::boot();
}
