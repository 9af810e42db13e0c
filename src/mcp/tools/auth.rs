//! Device-code sign-in MCP tool handler.
//!
//! Advertised only when the `device-code-auth` feature flag is active
//! and the server runs on the stdio transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use tracing::{info, info_span, Instrument};

use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::to_error_data;

/// Handle the `device_code_login` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on platform failures.
pub async fn device_code_login(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());

    async move {
        let login = state
            .platform
            .begin_device_code_login()
            .await
            .map_err(to_error_data)?;
        info!(user_code = %login.user_code, "device-code flow initiated");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            serde_json::to_value(login)
                .map_err(|err| rmcp::ErrorData::internal_error(err.to_string(), None))?,
        )?]))
    }
    .instrument(info_span!("device_code_login"))
    .await
}
