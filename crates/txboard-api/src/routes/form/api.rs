//! Create form HTMX endpoints
//!
//! Endpoints:
//! - htmx_form_open: Show an empty form
//! - htmx_form_close: Dismiss the form
//! - htmx_form_field: Apply input changes to the working copy
//! - htmx_form_save: Submit the working copy

use crate::{report_uncaught, ApiError, AppState};
use axum::http::StatusCode;
use txboard_utils::parse_form_pairs;

/// "Add transaction" button
pub async fn htmx_form_open(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    state.view.open_create_form();
    axum::response::Html(state.view.render_form_slot())
}

/// Modal dismiss button
pub async fn htmx_form_close(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    state.view.dismiss_form();
    axum::response::Html(state.view.render_form_slot())
}

/// Input change; every posted pair is applied, known name or not
pub async fn htmx_form_field(
    state: axum::extract::State<AppState>,
    body: String,
) -> Result<StatusCode, ApiError> {
    for (name, value) in parse_form_pairs(&body) {
        if !state.view.field_changed(&name, value) {
            return Err(ApiError::BadRequest { message: "No form is open".to_string() });
        }
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Save button
///
/// The form's current inputs ride along with the request and are applied
/// first, so the last keystrokes are never lost to the input debounce.
/// The POST runs in the background; its failure is only reported as an
/// uncaught task error.
pub async fn htmx_form_save(
    state: axum::extract::State<AppState>,
    body: String,
) -> axum::response::Html<String> {
    for (name, value) in parse_form_pairs(&body) {
        state.view.field_changed(&name, value);
    }
    if let Some(handle) = state.view.save_form() {
        report_uncaught("submit", handle);
    }
    axum::response::Html(state.view.render_form_slot())
}
