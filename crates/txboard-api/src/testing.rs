//! In-memory backend and loggers for component and route tests

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, OnceLock, PoisonError};

use log::{Level, LevelFilter, Log, Metadata, Record};

use txboard_core::{
    ClientError, ClientResult, DraftRecord, ErrorContext, ErrorLogger, TransactionRecord, TransactionsApi,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(DraftRecord),
    Get(i64),
}

/// Backend that answers from queued results and records every call
///
/// An exhausted list queue answers with an empty list, an exhausted create
/// queue with success.
#[derive(Default)]
pub struct ScriptedApi {
    lists: Mutex<VecDeque<ClientResult<Vec<TransactionRecord>>>>,
    creates: Mutex<VecDeque<ClientResult<()>>>,
    details: Mutex<HashMap<i64, TransactionRecord>>,
    detail_failure: Mutex<Option<ClientError>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn push_list(&self, result: ClientResult<Vec<TransactionRecord>>) {
        self.lists.lock().unwrap().push_back(result);
    }

    pub fn push_create(&self, result: ClientResult<()>) {
        self.creates.lock().unwrap().push_back(result);
    }

    pub fn insert_detail(&self, record: TransactionRecord) {
        self.details.lock().unwrap().insert(record.id, record);
    }

    /// Every detail lookup from now on fails with `error`
    pub fn fail_details(&self, error: ClientError) {
        *self.detail_failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionsApi for ScriptedApi {
    async fn list_transactions(&self) -> ClientResult<Vec<TransactionRecord>> {
        self.calls.lock().unwrap().push(Call::List);
        self.lists.lock().unwrap().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_transaction(&self, draft: &DraftRecord) -> ClientResult<()> {
        self.calls.lock().unwrap().push(Call::Create(draft.clone()));
        self.creates.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn get_transaction(&self, id: i64) -> ClientResult<TransactionRecord> {
        self.calls.lock().unwrap().push(Call::Get(id));
        if let Some(error) = self.detail_failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.details
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                url: format!("http://backend/transactions/{}", id),
                status: 404,
                body: String::new(),
            })
    }
}

/// Logger that remembers which operations reported an error
#[derive(Default)]
pub struct RecordingLogger {
    operations: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }
}

impl ErrorLogger for RecordingLogger {
    fn log_error(&self, _error: &ClientError, context: &ErrorContext) {
        self.operations.lock().unwrap().push(context.operation.clone());
    }
}

pub fn record(id: i64, valid: bool, data: &str) -> TransactionRecord {
    TransactionRecord {
        id,
        valid,
        public_key: format!("pk{}", id),
        signature: format!("sig{}", id),
        transaction_data_string: data.to_string(),
    }
}

pub fn network_error() -> ClientError {
    ClientError::Request {
        url: "http://backend/transactions".to_string(),
        message: "connection refused".to_string(),
    }
}

/// One record seen by the process-wide capturing logger
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
}

pub struct CapturingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(LogEntry {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static CAPTURE: OnceLock<&'static CapturingLogger> = OnceLock::new();

/// Route the `log` facade into memory for the rest of this test binary
pub fn install_log_capture() -> &'static CapturingLogger {
    CAPTURE.get_or_init(|| {
        let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
            entries: Mutex::new(Vec::new()),
        }));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
        logger
    })
}

/// Everything logged through the `log` facade by this test binary so far
///
/// The logger is global and tests run concurrently, so callers filter by a
/// message unique to their test.
pub fn captured_logs() -> Vec<LogEntry> {
    install_log_capture().entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
}
