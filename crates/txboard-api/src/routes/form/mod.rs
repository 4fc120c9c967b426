//! Create form routes
//!
//! Every endpoint maps one browser event onto a ListView operation and
//! answers with the re-rendered form slot (or nothing).

pub mod api;

pub use api::{htmx_form_open, htmx_form_close, htmx_form_field, htmx_form_save};
