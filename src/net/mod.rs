//! Networking modules for the site's REST API.

pub mod api;
