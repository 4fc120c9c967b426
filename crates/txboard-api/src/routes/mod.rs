//! Route modules for the web server
//!
//! - transactions: Main page, table snapshot, record detail
//! - form: Create form events (open, close, field input, save)
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: HTMX fragment endpoints
//! - page.rs: Full page rendering (transactions only)

pub mod transactions;
pub mod form;
