//! Connection MCP tool handlers.
//!
//! The wire codec runs at the edges of every call: inbound payloads are
//! decoded into typed [`Connection`] graphs before reaching the
//! platform service, and results are encoded back to wire form for the
//! reply. Decode failures surface as `invalid_params`, never a crash.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolCallContext;
use rmcp::model::CallToolResult;
use serde_json::{json, Value};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::codec::connection::Connection;
use crate::mcp::handler::FabricServer;
use crate::mcp::tools::util::{parse_input, to_error_data};

/// Input parameters for `get_connection` and `delete_connection`.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConnectionIdInput {
    /// Target connection identifier.
    connection_id: String,
}

/// Handle the `list_connections` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on platform failures.
pub async fn list(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());

    async move {
        let connections = state
            .platform
            .list_connections()
            .await
            .map_err(to_error_data)?;
        info!(count = connections.len(), "listed connections");

        let value: Vec<Value> = connections.iter().map(Connection::encode).collect();
        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            json!({ "value": value }),
        )?]))
    }
    .instrument(info_span!("list_connections"))
    .await
}

/// Handle the `get_connection` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn get(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: ConnectionIdInput = parse_input("get_connection", context.arguments)?;
    let span = info_span!("get_connection", connection_id = %input.connection_id);

    async move {
        let connection = state
            .platform
            .get_connection(&input.connection_id)
            .await
            .map_err(to_error_data)?;

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            connection.encode(),
        )?]))
    }
    .instrument(span)
    .await
}

/// Handle the `create_connection` tool call.
///
/// A fresh identifier is assigned before decode so the full payload
/// validates against the connection schema.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn create(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let mut args = context.arguments.unwrap_or_default();
    args.entry("id".to_owned())
        .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));

    async move {
        let connection =
            Connection::decode(&Value::Object(args)).map_err(|err| to_error_data(err.into()))?;
        let created = state
            .platform
            .create_connection(connection)
            .await
            .map_err(to_error_data)?;
        info!(connection_id = %created.id, "connection created");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            created.encode(),
        )?]))
    }
    .instrument(info_span!("create_connection"))
    .await
}

/// Handle the `update_connection` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn update(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let args = context.arguments.unwrap_or_default();

    async move {
        let connection =
            Connection::decode(&Value::Object(args)).map_err(|err| to_error_data(err.into()))?;
        let updated = state
            .platform
            .update_connection(connection)
            .await
            .map_err(to_error_data)?;
        info!(connection_id = %updated.id, "connection updated");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            updated.encode(),
        )?]))
    }
    .instrument(info_span!("update_connection"))
    .await
}

/// Handle the `delete_connection` tool call.
///
/// # Errors
///
/// Returns `rmcp::ErrorData` on validation or platform failures.
pub async fn delete(
    context: ToolCallContext<'_, FabricServer>,
) -> Result<CallToolResult, rmcp::ErrorData> {
    let state = Arc::clone(context.service.state());
    let input: ConnectionIdInput = parse_input("delete_connection", context.arguments)?;
    let span = info_span!("delete_connection", connection_id = %input.connection_id);

    async move {
        state
            .platform
            .delete_connection(&input.connection_id)
            .await
            .map_err(to_error_data)?;
        info!(connection_id = %input.connection_id, "connection deleted");

        Ok(CallToolResult::success(vec![rmcp::model::Content::json(
            json!({ "deleted": true, "connectionId": input.connection_id }),
        )?]))
    }
    .instrument(span)
    .await
}
