//! Gateway MCP tool handlers.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use serde_json::{json, Value};
use tracing::{info, info_span, Instrument};

use crate::codec::gateway::Gateway;
use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::{parse_input, to_error_data};

/// Input parameters for `get_gateway`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GatewayIdInput {
    /// Target gateway identifier.
    gateway_id: String,
}

/// Handle the `list_gateways` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on platform failures.
pub async fn list(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());

    async move {
        let gateways = state.platform.list_gateways().await.map_err(to_error_data)?;
        info!(count = gateways.len(), "listed gateways");

        let value: Vec<Value> = gateways.iter().map(Gateway::encode).collect();
        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            json!({ "value": value }),
        )?]))
    }
    .instrument(info_span!("list_gateways"))
    .await
}

/// Handle the `get_gateway` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn get(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: GatewayIdInput = parse_input("get_gateway", context.arguments)?;
    let span = info_span!("get_gateway", gateway_id = %input.gateway_id);

    async move {
        let gateway = state
            .platform
            .get_gateway(&input.gateway_id)
            .await
            .map_err(to_error_data)?;

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            gateway.encode(),
        )?]))
    }
    .instrument(span)
    .await
}
