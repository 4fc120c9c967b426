//! Transactions page rendering - Full page endpoint
//!
//! Every full page load is a fresh mount of the list view and starts one
//! fetch. That fetch completes in the background; the polled table picks up
//! the result. HTMX requests for the page only re-render.

use crate::AppState;

/// Main page: the whole list view inside the base layout
pub async fn page_index(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    if !crate::is_htmx_request(&headers) {
        state.view.initialize();
        log::info!("Page mounted, fetch started");
    }

    let inner_content = state.view.render();
    axum::response::Html(crate::page_response(&headers, "Transactions", &inner_content))
}
