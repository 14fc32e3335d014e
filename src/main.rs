//! SSR host: renders the Leptos app and serves the compiled WASM bundle.
//!
//! The booking/chat backend is a separate service; this binary owns no API
//! routes beyond `/healthz`.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use mentor_client::app::{App, shell};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "mentor-client host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(port) = port_override()? {
        leptos_options.site_addr.set_port(port);
    }
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;
    tracing::info!(%addr, "mentor-client listening");
    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| format!("server: {e}"))
}

/// `PORT` overrides the port from `[package.metadata.leptos]`.
fn port_override() -> Result<Option<u16>, String> {
    match std::env::var("PORT") {
        Ok(raw) => raw.parse().map(Some).map_err(|e| format!("invalid PORT {raw:?}: {e}")),
        Err(_) => Ok(None),
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
