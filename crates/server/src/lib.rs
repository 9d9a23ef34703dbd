//! Static file host for the drum machine page and its wasm bundle.

pub mod config;

use std::path::Path;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use thiserror::Error;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid address {addr}: {source}")]
    InvalidAddress {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("TLS enabled but {0} is not set")]
    MissingTlsPath(&'static str),

    #[error("failed to load TLS config: {0}")]
    Tls(std::io::Error),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn create_routes(static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
        // Always revalidate so a rebuilt bundle is picked up
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "OK"
}
