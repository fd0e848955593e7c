//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the host's own endpoints and stitches them with Leptos SSR rendering
//! under a single Axum router. The auth endpoints the client calls live on a
//! separate backend and are not served here.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::StartupError;

/// Host-only routes that do not go through the Leptos renderer.
fn host_routes() -> Router {
    Router::new()
        .route("/signup", get(redirect_signup))
        .route("/healthz", get(healthz))
}

async fn redirect_signup() -> Redirect {
    Redirect::temporary(&client::state::nav::signup_href())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Host routes + Leptos SSR pages + the compiled `/pkg` bundle.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::debug!(site_root = %site_root_path.display(), "serving static bundle");

    Ok(host_routes()
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
