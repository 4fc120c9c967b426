//! HTTP server with HTMX support
//!
//! The process hosts a single list view. Browser events arrive as HTMX
//! requests, are applied to the view, and the affected fragment is rendered
//! back.
//!
//! Routes are organized into modules:
//! - routes::transactions: Main page, table snapshot, record detail
//! - routes::form: Create form events

pub mod components;
pub mod error;
pub mod routes;

#[cfg(test)]
mod testing;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use txboard_config::Config;
use txboard_core::{ApiRef, HttpTransactionsApi};

pub use components::{FormEvent, ListView, RecordForm};
pub use error::{ApiError, ApiErrorCode};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub view: Arc<ListView>,
    pub api: ApiRef,
    pub config: Config,
}

impl AppState {
    /// State wired to the given backend
    pub fn new(config: Config, api: ApiRef) -> Self {
        let view = ListView::new(api.clone()).with_poll_interval(config.ui.poll_interval_secs);
        Self {
            view: Arc::new(view),
            api,
            config,
        }
    }

    /// State talking HTTP to `backend.base_url`
    pub fn from_config(config: Config) -> Self {
        let api: ApiRef = Arc::new(HttpTransactionsApi::new(config.backend.base_url.clone()));
        Self::new(config, api)
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{htmx_transaction_detail, htmx_transactions_table, page_index};
    use routes::form::{htmx_form_close, htmx_form_field, htmx_form_open, htmx_form_save};

    Router::new()
        .route("/api/health", get(health_check))
        // Page
        .route("/", get(page_index))
        // HTMX partial routes
        .route("/transactions/table", get(htmx_transactions_table))
        .route("/transactions/:id/detail", get(htmx_transaction_detail))
        .route("/form/open", post(htmx_form_open))
        .route("/form/close", post(htmx_form_close))
        .route("/form/field", post(htmx_form_field))
        .route("/form/save", post(htmx_form_save))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - txboard</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css">
</head>
<body>
    <main class="content p-3 mb-2 bg-info">
    {}
    </main>
</body>
</html>"#,
        title, content
    )
}

/// Check if request is from HTMX (partial page update)
pub(crate) fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(headers: &axum::http::HeaderMap, title: &str, inner_content: &str) -> String {
    if is_htmx_request(headers) {
        inner_content.to_string()
    } else {
        base_html(title, inner_content)
    }
}

// ==================== Background Tasks ====================

/// Watch a detached task and report an `Err` it finishes with
///
/// This is the process-wide fallback for failures nobody handles, the
/// counterpart of an unhandled rejection in a browser console. The returned
/// handle resolves once the outcome has been reported.
pub fn report_uncaught<E>(operation: &'static str, handle: JoinHandle<Result<(), E>>) -> JoinHandle<()>
where
    E: std::fmt::Display + Send + 'static,
{
    tokio::spawn(async move {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::error!(target: "txboard::uncaught", "Uncaught error in {}: {}", operation, e),
            Err(e) => log::error!(target: "txboard::uncaught", "Task for {} did not finish: {}", operation, e),
        }
    })
}

// ==================== Server ====================

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

/// Start the HTTP server
///
/// Binds `server.host:server.port` and serves until Ctrl-C.
pub async fn start_server(state: AppState) -> std::io::Result<()> {
    let addr = state.config.listen_addr();
    let backend = state.config.backend.base_url.clone();
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting txboard on http://{}", addr);
    log::info!("Transactions backend: {}", backend);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped gracefully");
    Ok(())
}

// ==================== Tests ====================
