use std::sync::Arc;

use crate::models::page::SiteContent;
use crate::render::PageContext;

/// Shared application state injected into all route handlers via Axum extractors.
/// Composed once at startup; nothing in it changes afterwards.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<SiteContent>,
    /// Accent, footer year and asset lookup shared by every render.
    pub page: Arc<PageContext>,
}
