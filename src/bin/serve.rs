//! Static asset host (secondary binary).
//!
//! Serves files from `STATIC_ROOT` (default: current directory) plus a JSON
//! health-check endpoint, listening on `PORT` (default 3000).

use anyhow::Result;
use blockfall::server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    run_server(ServerConfig::from_env(), None).await
}
