//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stitches the health probe with Leptos SSR rendering under a single Axum
//! router. The compiled WASM/CSS bundle is served from `/pkg`. Item
//! requests go straight from the browser to the external API; nothing here
//! proxies them.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Routes that do not depend on Leptos configuration.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Leptos SSR frontend: health probe + app shell + static bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            let api_base_url = config.api_base_url.clone();
            move || client::app::shell(opts.clone(), api_base_url.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
