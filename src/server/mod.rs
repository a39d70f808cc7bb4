//! Static-asset HTTP server
//!
//! Serves the project files plus a JSON health-check endpoint. The server is
//! a thin host: it carries no game logic and shares no state with the game
//! binary.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use tokio::sync::oneshot;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory static files are served from.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            root: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let root = env::var("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        Self { host, port, root }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

/// Health-check payload
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

/// Build the router: health endpoint plus a static-file fallback.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback(serve_static)
        .with_state(config)
}

/// Start the HTTP server.
///
/// `ready_tx` receives the bound address once the listener is up; tests bind
/// port 0 and use it to learn the real port.
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let bound = listener.local_addr()?;

    println!(
        "[Server] serving {} on http://{}",
        config.root.display(),
        bound
    );
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    axum::serve(listener, router(config)).await?;
    Ok(())
}

async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        message: "blockfall asset server",
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn serve_static(State(config): State<ServerConfig>, uri: Uri) -> Response {
    let rel = uri.path().trim_start_matches('/');
    let rel = if rel.is_empty() { "index.html" } else { rel };

    // Refuse anything that tries to climb out of the root.
    if rel.split('/').any(|seg| seg == "..") {
        return (StatusCode::FORBIDDEN, "forbidden").into_response();
    }

    let path = config.root.join(rel);
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Content type by file extension; unknown extensions download as bytes.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "text/javascript; charset=utf-8",
        "json" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "wasm" => "application/wasm",
        _ => "application/octet-stream",
    }
}
