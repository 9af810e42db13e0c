//! HTTP/SSE transport.
//!
//! Mounts an [`SseServer`] behind an axum router so remote clients can
//! connect over HTTP with Server-Sent Events streaming. A plain
//! `/health` endpoint allows liveness probing without initiating an
//! MCP session.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, FabricServer};
use crate::{AppError, Result};

/// Handler for `GET /health` — returns 200 OK with a plain-text body.
async fn health() -> &'static str {
    "ok"
}

/// Start the HTTP/SSE MCP transport on `config.http_port`.
///
/// Each SSE connection creates a fresh [`FabricServer`] sharing the
/// same [`AppState`]; the composed registry is identical for every
/// connection.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the server fails to bind or errors while
/// serving.
pub async fn serve_sse(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let port = state.config.http_port;
    let bind = SocketAddr::from(([127, 0, 0, 1], port));

    let config = SseServerConfig {
        bind,
        sse_path: "/sse".into(),
        post_path: "/message".into(),
        ct: ct.clone(),
        sse_keep_alive: None,
    };

    let (sse_server, router) = SseServer::new(config);
    let router = router.route("/health", get(health));

    // Each inbound SSE connection gets its own FabricServer instance.
    let server_ct = {
        let state = Arc::clone(&state);
        sse_server.with_service(move || FabricServer::new(Arc::clone(&state)))
    };

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|err| AppError::Mcp(format!("failed to bind SSE on {bind}: {err}")))?;

    info!(%bind, "starting HTTP/SSE MCP transport");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            ct.cancelled().await;
            server_ct.cancel();
        })
        .await
        .map_err(|err| AppError::Mcp(format!("SSE server error: {err}")))?;

    info!("HTTP/SSE MCP transport shut down");
    Ok(())
}
