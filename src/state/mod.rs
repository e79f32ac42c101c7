//! Session, page, and render-decision state for the page-load pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision modules: nothing in here touches the DOM or the network,
//! so every branch is exercised by native tests.

pub mod guard;
pub mod header;
pub mod page;
pub mod session;
