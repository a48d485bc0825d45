mod config;
mod content;
mod errors;
mod models;
mod motion;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use chrono::Datelike;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::load_content;
use crate::render::assets::AssetResolver;
use crate::render::PageContext;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    // Compose page content: built-in literals, optionally overridden from a file
    let (content, source) = load_content(config.content_path.as_deref()).await?;
    info!("Content source: {source}");

    if !config.static_dir.is_dir() {
        warn!(
            "Static directory {} not found; all images will use placeholders",
            config.static_dir.display()
        );
    }

    // Check image files once so page handlers never touch the disk
    let static_dir = config.static_dir.clone();
    let image_paths: Vec<String> = content
        .image_paths()
        .into_iter()
        .map(str::to_string)
        .collect();
    let wanted = image_paths.len();
    let assets =
        tokio::task::spawn_blocking(move || AssetResolver::scan(static_dir, image_paths)).await?;
    info!("Found {} of {} images under the static directory", assets.found(), wanted);

    let page = PageContext {
        accent: config.accent.clone(),
        year: chrono::Utc::now().year(),
        assets,
    };
    info!("Accent colour: {}, footer year: {}", page.accent, page.year);

    // Build app state
    let state = AppState {
        content: Arc::new(content),
        page: Arc::new(page),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
