//! Pipeline MCP tool handlers.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value};
use tracing::{info, info_span, Instrument};

use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::{parse_input, to_error_data};
use crate::models::pipeline::PipelineInfo;

/// Input parameters for `list_pipelines`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPipelinesInput {
    /// Optional workspace scope.
    workspace_id: Option<String>,
    /// Token from a previous page; absent for the first page.
    continuation_token: Option<String>,
}

/// Handle the `list_pipelines` tool call.
///
/// The reply carries a formatted page: a fixed-subset projection of
/// each pipeline under `value`, plus the continuation pair when (and
/// only when) a further page exists.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn list(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: ListPipelinesInput = parse_input("list_pipelines", context.arguments)?;
    let span = info_span!(
        "list_pipelines",
        workspace_id = input.workspace_id.as_deref().unwrap_or("*"),
        continuation = input.continuation_token.is_some(),
    );

    async move {
        let page = state
            .platform
            .list_pipelines(
                input.workspace_id.as_deref(),
                input.continuation_token.as_deref(),
            )
            .await
            .map_err(to_error_data)?;
        info!(count = page.value.len(), has_more = page.has_more(), "listed pipelines");

        let infos: Vec<PipelineInfo> = page.value.iter().map(PipelineInfo::from).collect();
        let mut reply = Map::new();
        reply.insert(
            "value".to_owned(),
            serde_json::to_value(infos)
                .map_err(|err| rmcp::ErrorData::internal_error(err.to_string(), None))?,
        );
        // The continuation pair travels together or not at all.
        if let Some((token, uri)) = page.continuation() {
            reply.insert("continuationToken".to_owned(), Value::String(token.to_owned()));
            reply.insert("continuationUri".to_owned(), Value::String(uri.to_owned()));
        }

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            Value::Object(reply),
        )?]))
    }
    .instrument(span)
    .await
}
