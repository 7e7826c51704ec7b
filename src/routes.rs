//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own: it serves the Leptos SSR pages, the
//! hydration bundle under `/pkg`, and a health probe.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Routes served outside the Leptos app.
pub fn site_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host router: SSR pages, `/pkg` assets, and [`site_routes`].
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    site_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
