//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the host's small HTTP surface and stitches it with Leptos SSR
//! rendering under a single Axum router. The widget config from `AppState`
//! is provided to every SSR render and embedded in the page for hydration.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chat_widget::config::WidgetConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Non-UI routes: health probe and the active widget config.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/widget-config", get(widget_config))
        .with_state(state)
}

/// Full host: API routes + Leptos SSR pages + `/pkg` assets, with request tracing.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` settings / `LEPTOS_*` env vars).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(chat_widget::app::App);

    let context_widget = Arc::clone(&state.widget);
    let shell_widget = Arc::clone(&state.widget);
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(WidgetConfig::clone(&context_widget)),
            {
                let opts = leptos_options.clone();
                move || chat_widget::app::shell(opts.clone(), WidgetConfig::clone(&shell_widget))
            },
        )
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn widget_config(State(state): State<AppState>) -> Json<WidgetConfig> {
    Json(WidgetConfig::clone(&state.widget))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
