//! Axum route handlers for the résumé pages.

use axum::{
    extract::State,
    http::{header, Uri},
    response::{Html, IntoResponse},
};
use tracing::debug;

use crate::errors::AppError;
use crate::render::{render_resume_one, render_resume_two};
use crate::state::AppState;

/// Client runtime that plays the reveal descriptors.
const REVEAL_SCRIPT: &str = include_str!("../../assets/reveal.js");

/// GET /resume1
pub async fn handle_resume_one(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_resume_one(&state.content.resume1, &state.page)?;
    debug!(bytes = html.len(), "rendered resume1");
    Ok(Html(html))
}

/// GET /resume2, also served at /
pub async fn handle_resume_two(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = render_resume_two(&state.content.resume2, &state.page)?;
    debug!(bytes = html.len(), "rendered resume2");
    Ok(Html(html))
}

/// GET /assets/reveal.js
pub async fn handle_reveal_script() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/javascript; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        REVEAL_SCRIPT,
    )
}

/// Anything neither routed nor present in the static directory.
pub async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}
