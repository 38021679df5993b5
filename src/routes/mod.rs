//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and the Leptos SSR console under a single
//! Axum router. Compiled client assets are served from `/pkg`. Any other
//! page path that the console does not declare is redirected to the
//! console's default route, so `/` and stale bookmarks land on `/home`.
//! Everything under `/api` stays JSON, including unknown paths.

pub mod session;

use std::path::PathBuf;

use axum::Router;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum::routing::{any, get};
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use admin_client::app::{App, shell};
use admin_client::bootstrap::{BootstrapError, DEFAULT_ROUTE, bootstrap};
use admin_client::modules::FeatureModule;
use admin_client::routing::TitleSink;

use crate::state::AppState;

/// JSON API plus health check.
fn api_routes() -> Router<AppState> {
    Router::new()
        .route(session::SESSION_PATH, get(session::current_session))
        .route("/api", any(api_not_found))
        .route("/api/", any(api_not_found))
        .route("/api/{*rest}", any(api_not_found))
        .route("/healthz", get(healthz))
}

/// Titles are rendered per request during SSR; the startup check drops them.
struct DiscardTitles;

impl TitleSink for DiscardTitles {
    fn apply_title(&self, _title: Option<String>) {}
}

/// Run the console bootstrap once before serving.
///
/// A console that cannot bootstrap renders no page routes, which would turn
/// the default-route redirect into a loop. The server refuses to start
/// instead.
///
/// # Errors
///
/// Returns the first [`BootstrapError`] from the console startup.
pub fn verify_console(modules: Vec<FeatureModule>) -> Result<(), BootstrapError> {
    let console = bootstrap(modules, DiscardTitles)?;
    tracing::info!(routes = console.routes.states().len(), "console bootstrap verified");
    Ok(())
}

/// Full application router: API, Leptos SSR console and static assets.
pub fn app(state: AppState) -> Router {
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(state.leptos_options.site_root.as_ref());

    api_routes()
        .leptos_routes(&state, routes, {
            let options = state.leptos_options.clone();
            move || shell(options.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(fallback)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Where an unrouted path should be sent, or `None` if it looks like a
/// missing file rather than a page.
fn fallback_target(path: &str) -> Option<&'static str> {
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if last_segment.contains('.') {
        return None;
    }
    Some(DEFAULT_ROUTE)
}

async fn fallback(uri: Uri) -> Response {
    match fallback_target(uri.path()) {
        Some(target) => {
            tracing::debug!(path = %uri.path(), %target, "unmatched path, redirecting to default route");
            Redirect::temporary(target).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn api_not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "unknown api path");
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" }))).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
