//! Transaction records, drafts and the client for the transactions backend

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiRef, HttpTransactionsApi, TransactionsApi};
pub use error::{ClientError, ClientResult, DefaultErrorLogger, ErrorCode, ErrorContext, ErrorLogger, ErrorSeverity};
pub use models::{DraftRecord, TransactionRecord};
