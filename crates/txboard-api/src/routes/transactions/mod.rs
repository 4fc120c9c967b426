//! Transaction routes - Main page, table, detail
//!
//! Structure:
//! - api.rs: HTMX fragment endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{htmx_transactions_table, htmx_transaction_detail};
pub use page::page_index;
