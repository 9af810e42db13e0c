//! Stdio transport setup.
//!
//! Wires [`FabricServer`] to stdin/stdout for direct invocation by
//! agentic IDEs and local MCP clients.

use std::sync::Arc;

use rmcp::service::ServiceExt;
use rmcp::transport::io::stdio;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::handler::{AppState, FabricServer};
use crate::{AppError, Result};

/// Serve the MCP server over stdio until the cancellation token fires
/// or the client disconnects.
///
/// # Errors
///
/// Returns `AppError::Mcp` if the transport fails to initialize or the
/// service errors while running.
pub async fn serve_stdio(state: Arc<AppState>, ct: CancellationToken) -> Result<()> {
    let server = FabricServer::new(state);
    let transport = stdio();

    info!("starting stdio MCP transport");
    let service = server
        .serve_with_ct(transport, ct)
        .await
        .map_err(|err| AppError::Mcp(format!("stdio transport failed: {err}")))?;

    service
        .waiting()
        .await
        .map_err(|err| AppError::Mcp(format!("stdio service error: {err}")))?;

    info!("stdio MCP transport shut down");
    Ok(())
}
