//! Transactions HTMX endpoints
//!
//! Endpoints:
//! - htmx_transactions_table: Current snapshot as a table fragment
//! - htmx_transaction_detail: One record fetched from the backend

use crate::{ApiError, AppState};
use txboard_core::ErrorSeverity;
use txboard_utils::escape_html;

/// HTMX: Table fragment, polled by the page
///
/// Pure re-render; never triggers a fetch.
pub async fn htmx_transactions_table(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    axum::response::Html(state.view.render_table())
}

/// HTMX: Detail panel for one record
///
/// Read-only lookup against the backend; the table snapshot is untouched.
pub async fn htmx_transaction_detail(
    state: axum::extract::State<AppState>,
    path: axum::extract::Path<i64>,
) -> Result<axum::response::Html<String>, ApiError> {
    let id = path.0;
    let record = state.api.get_transaction(id).await.map_err(|e| {
        let error = match e.status() {
            Some(404) => ApiError::NotFound { resource: format!("Transaction {}", id) },
            _ => ApiError::Upstream(e),
        };
        match error.severity() {
            ErrorSeverity::Warning => log::warn!("Detail lookup for transaction {} failed: {}", id, error),
            ErrorSeverity::Error => log::error!("Detail lookup for transaction {} failed: {}", id, error),
        }
        error
    })?;

    Ok(axum::response::Html(format!(
        r#"<div class='card p-3 mt-3'>
    <h5 class='card-title'>Transaction {}</h5>
    <dl class='mb-0'>
        <dt>Valid</dt><dd>{}</dd>
        <dt>Public key</dt><dd><code class='text-break'>{}</code></dd>
        <dt>Signature</dt><dd><code class='text-break'>{}</code></dd>
        <dt>Data</dt><dd><code class='text-break'>{}</code></dd>
    </dl>
</div>"#,
        record.id,
        record.valid_label(),
        escape_html(&record.public_key),
        escape_html(&record.signature),
        escape_html(&record.transaction_data_string),
    )))
}
