//! Workspace MCP tool handlers.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use serde_json::json;
use tracing::{info, info_span, Instrument};

use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::to_error_data;

/// Handle the `list_workspaces` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on platform failures.
pub async fn list(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());

    async move {
        let workspaces = state
            .platform
            .list_workspaces()
            .await
            .map_err(to_error_data)?;
        info!(count = workspaces.len(), "listed workspaces");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            json!({ "value": workspaces }),
        )?]))
    }
    .instrument(info_span!("list_workspaces"))
    .await
}
