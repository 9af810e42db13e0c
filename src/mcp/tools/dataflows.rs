//! Dataflow MCP tool handlers.
//!
//! Advertised only when the `dataflow-query` feature flag is active.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use serde_json::json;
use tracing::{info, info_span, Instrument};

use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::{parse_input, to_error_data};

/// Input parameters for `list_dataflows`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDataflowsInput {
    /// Optional workspace scope.
    workspace_id: Option<String>,
}

/// Input parameters for `query_dataflow`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct QueryDataflowInput {
    /// Target dataflow identifier.
    dataflow_id: String,
    /// Query text to evaluate.
    query: String,
}

/// Handle the `list_dataflows` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn list(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: ListDataflowsInput = parse_input("list_dataflows", context.arguments)?;
    let span = info_span!(
        "list_dataflows",
        workspace_id = input.workspace_id.as_deref().unwrap_or("*"),
    );

    async move {
        let dataflows = state
            .platform
            .list_dataflows(input.workspace_id.as_deref())
            .await
            .map_err(to_error_data)?;
        info!(count = dataflows.len(), "listed dataflows");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            json!({ "value": dataflows }),
        )?]))
    }
    .instrument(span)
    .await
}

/// Handle the `query_dataflow` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn query(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: QueryDataflowInput = parse_input("query_dataflow", context.arguments)?;
    let span = info_span!("query_dataflow", dataflow_id = %input.dataflow_id);

    async move {
        let result = state
            .platform
            .query_dataflow(&input.dataflow_id, &input.query)
            .await
            .map_err(to_error_data)?;
        info!(row_count = result.row_count, "dataflow query complete");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            serde_json::to_value(result)
                .map_err(|err| rmcp::ErrorData::internal_error(err.to_string(), None))?,
        )?]))
    }
    .instrument(span)
    .await
}
