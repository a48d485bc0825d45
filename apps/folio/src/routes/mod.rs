pub mod health;
pub mod pages;

use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use tower_http::services::ServeDir;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Unmatched paths fall through to the static directory (images etc.), then a JSON 404.
    let static_files = ServeDir::new(state.page.assets.root())
        .not_found_service(pages::handle_not_found.into_service());

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(pages::handle_resume_two))
        .route("/resume1", get(pages::handle_resume_one))
        .route("/resume2", get(pages::handle_resume_two))
        .route("/assets/reveal.js", get(pages::handle_reveal_script))
        .fallback_service(static_files)
        .with_state(state)
}
