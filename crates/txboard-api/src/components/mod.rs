//! UI components
//!
//! - list_view: Transactions table, owns the records snapshot and the form
//! - record_form: Modal with the working copy of one draft

pub mod list_view;
pub mod record_form;

pub use list_view::ListView;
pub use record_form::{FormEvent, RecordForm};
