//! ListView - the transactions table and owner of the create form
//!
//! Holds the snapshot of the last successful fetch. Records are never
//! edited locally: every change is observed through a full refresh.
//!
//! Network work runs on spawned tasks. State guards are only held for the
//! duration of a read or a swap, never across an `.await`, so the view stays
//! usable while requests are in flight. Concurrent refreshes are not
//! coordinated; whichever response lands last is what gets displayed.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::task::JoinHandle;
use txboard_core::{
    ApiRef, ClientResult, DefaultErrorLogger, DraftRecord, ErrorContext, ErrorLogger, TransactionRecord,
};
use txboard_utils::escape_html;

use super::record_form::{FormEvent, RecordForm};

#[derive(Debug, Default)]
struct ListState {
    is_form_open: bool,
    draft: DraftRecord,
    records: Vec<TransactionRecord>,
    /// Mounted form, present exactly while `is_form_open`
    form: Option<RecordForm>,
}

pub struct ListView {
    api: ApiRef,
    logger: Arc<dyn ErrorLogger>,
    poll_interval_secs: u64,
    state: RwLock<ListState>,
}

impl ListView {
    pub fn new(api: ApiRef) -> Self {
        Self {
            api,
            logger: Arc::new(DefaultErrorLogger),
            poll_interval_secs: 2,
            state: RwLock::new(ListState::default()),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// How often the browser re-renders the table
    pub fn with_poll_interval(mut self, secs: u64) -> Self {
        self.poll_interval_secs = secs;
        self
    }

    fn state(&self) -> RwLockReadGuard<'_, ListState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, ListState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================== Operations ====================

    /// Mount hook: every fresh mount of the view triggers exactly one refresh
    pub fn initialize(self: &Arc<Self>) -> JoinHandle<()> {
        log::debug!("list view mounted, fetching transactions");
        self.refresh()
    }

    /// Re-fetch the full list in the background
    pub fn refresh(self: &Arc<Self>) -> JoinHandle<()> {
        let view = Arc::clone(self);
        tokio::spawn(async move { view.reload().await })
    }

    /// Fetch and replace `records`; failures are logged and leave the
    /// previous snapshot in place
    pub async fn reload(&self) {
        match self.api.list_transactions().await {
            Ok(records) => {
                log::debug!("fetched {} transactions", records.len());
                self.state_mut().records = records;
            }
            Err(e) => self.logger.log_error(&e, &ErrorContext::new("refresh")),
        }
    }

    /// Reset the draft and show the form
    ///
    /// A form that is already mounted keeps its working copy.
    pub fn open_create_form(&self) {
        let mut state = self.state_mut();
        state.draft = DraftRecord::empty();
        state.is_form_open = true;
        if state.form.is_none() {
            state.form = Some(RecordForm::new(&state.draft));
        }
    }

    /// Hide the form, discarding its working copy
    pub fn close_form(&self) {
        let mut state = self.state_mut();
        state.is_form_open = false;
        state.form = None;
    }

    /// Close the form, then POST `item` and refresh on success
    ///
    /// The form is closed before this returns, so before any request is made.
    /// A failed POST is not handled here; it is the returned task's result.
    pub fn submit_draft(self: &Arc<Self>, item: DraftRecord) -> JoinHandle<ClientResult<()>> {
        self.close_form();
        let view = Arc::clone(self);
        tokio::spawn(async move {
            view.api.create_transaction(&item).await?;
            view.reload().await;
            Ok(())
        })
    }

    /// Route an event coming from the mounted form
    pub fn dispatch(self: &Arc<Self>, event: FormEvent) -> Option<JoinHandle<ClientResult<()>>> {
        match event {
            FormEvent::Save(item) => Some(self.submit_draft(item)),
            FormEvent::Close => {
                self.close_form();
                None
            }
        }
    }

    /// Forward an input change to the mounted form. Returns false when no
    /// form is open.
    pub fn field_changed(&self, name: &str, value: impl Into<String>) -> bool {
        match self.state_mut().form.as_mut() {
            Some(form) => {
                form.field_changed(name, value);
                true
            }
            None => false,
        }
    }

    /// Press the form's save button
    pub fn save_form(self: &Arc<Self>) -> Option<JoinHandle<ClientResult<()>>> {
        let event = self.state().form.as_ref().map(RecordForm::save)?;
        self.dispatch(event)
    }

    /// Press the form's dismiss button
    pub fn dismiss_form(self: &Arc<Self>) {
        let event = self.state().form.as_ref().map(RecordForm::dismiss);
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    // ==================== Accessors ====================

    pub fn records(&self) -> Vec<TransactionRecord> {
        self.state().records.clone()
    }

    pub fn is_form_open(&self) -> bool {
        self.state().is_form_open
    }

    /// The draft the form was (or will be) seeded with
    pub fn draft(&self) -> DraftRecord {
        self.state().draft.clone()
    }

    /// Working copy of the mounted form
    pub fn form_draft(&self) -> Option<DraftRecord> {
        self.state().form.as_ref().map(|f| f.working_copy().clone())
    }

    // ==================== Rendering ====================

    /// Full component: heading, add button, table, detail panel and form slot
    pub fn render(&self) -> String {
        format!(
            r#"<div id='list-view'>
    <h1 class='text-white text-uppercase text-center my-4'>Transactions</h1>
    <div class='row'>
        <div class='col-md-6 col-sm-10 mx-auto p-0'>
            <div class='card p-3'>
                <button class='btn btn-warning' hx-post='/form/open' hx-target='#form-slot' hx-swap='innerHTML'>Add transaction</button>
            </div>
            {}
            <div id='record-detail'></div>
        </div>
    </div>
    <div id='form-slot'>{}</div>
</div>"#,
            self.render_table(),
            self.render_form_slot()
        )
    }

    /// Table of the current snapshot, one row per record in fetch order
    pub fn render_table(&self) -> String {
        let rows: String = self.state().records.iter().map(render_row).collect();
        format!(
            r#"<div id='transactions-table' hx-get='/transactions/table' hx-trigger='every {}s' hx-swap='outerHTML'>
    <table class='table table-striped table-bordered table-hover'>
        <thead><tr><th>ID</th><th>Valid</th><th>Data</th></tr></thead>
        <tbody>{}</tbody>
    </table>
</div>"#,
            self.poll_interval_secs, rows
        )
    }

    /// The mounted form, or nothing
    pub fn render_form_slot(&self) -> String {
        self.state()
            .form
            .as_ref()
            .map(RecordForm::render)
            .unwrap_or_default()
    }
}

fn render_row(record: &TransactionRecord) -> String {
    format!(
        r#"<tr data-id='{id}'><td><span class='mr-2' title='{pk}' hx-get='/transactions/{id}/detail' hx-target='#record-detail' style='cursor: pointer'>{id}</span></td><td><span class='mr-2' title='{sig}'>{valid}</span></td><td><span class='mr-2' title='{data}'>{data}</span></td></tr>"#,
        id = record.id,
        pk = escape_html(&record.public_key),
        sig = escape_html(&record.signature),
        valid = record.valid_label(),
        data = escape_html(&record.transaction_data_string),
    )
}

// ==================== Tests ====================
