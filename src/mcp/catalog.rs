//! Declared tool catalog: the base set plus flag-gated optional sets.
//!
//! Declaration order here is advertisement order. Every descriptor name
//! must be globally unique; composition fails at startup otherwise.

use serde_json::json;

use crate::flags;
use crate::registry::{ToolDescriptor, Transport};

/// The mandatory base tool set, always advertised.
#[allow(clippy::too_many_lines)] // Tool definitions are intentionally verbose for clarity.
#[must_use]
pub fn base_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_connections",
            "List every connection visible to the server.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
        ToolDescriptor::new(
            "get_connection",
            "Fetch a single connection by its identifier.",
            json!({
                "type": "object",
                "properties": {
                    "connectionId": { "type": "string" }
                },
                "required": ["connectionId"]
            }),
        ),
        ToolDescriptor::new(
            "create_connection",
            "Create a connection. The payload embeds connection details \
             (with polymorphic parameters) and a credential descriptor.",
            json!({
                "type": "object",
                "properties": {
                    "displayName": { "type": "string" },
                    "description": { "type": "string", "maxLength": 256 },
                    "connectivityType": { "type": "string" },
                    "workspaceId": { "type": "string" },
                    "gatewayId": { "type": "string" },
                    "connectionDetails": { "type": "object" },
                    "credentialDetails": { "type": "object" }
                },
                "required": ["displayName", "connectivityType", "connectionDetails", "credentialDetails"]
            }),
        ),
        ToolDescriptor::new(
            "update_connection",
            "Replace an existing connection with the supplied payload.",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "string" },
                    "displayName": { "type": "string" },
                    "description": { "type": "string", "maxLength": 256 },
                    "connectivityType": { "type": "string" },
                    "workspaceId": { "type": "string" },
                    "gatewayId": { "type": "string" },
                    "connectionDetails": { "type": "object" },
                    "credentialDetails": { "type": "object" }
                },
                "required": ["id", "displayName", "connectivityType", "connectionDetails", "credentialDetails"]
            }),
        ),
        ToolDescriptor::new(
            "delete_connection",
            "Delete a connection by its identifier.",
            json!({
                "type": "object",
                "properties": {
                    "connectionId": { "type": "string" }
                },
                "required": ["connectionId"]
            }),
        ),
        ToolDescriptor::new(
            "list_gateways",
            "List every gateway visible to the server.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
        ToolDescriptor::new(
            "get_gateway",
            "Fetch a single gateway by its identifier.",
            json!({
                "type": "object",
                "properties": {
                    "gatewayId": { "type": "string" }
                },
                "required": ["gatewayId"]
            }),
        ),
        ToolDescriptor::new(
            "list_workspaces",
            "List every workspace visible to the server.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
        ToolDescriptor::new(
            "list_pipelines",
            "List pipelines one page at a time, optionally scoped to a \
             workspace. Pass the continuation token from a previous page \
             to fetch the next one.",
            json!({
                "type": "object",
                "properties": {
                    "workspaceId": { "type": "string" },
                    "continuationToken": { "type": "string" }
                }
            }),
        ),
        ToolDescriptor::new(
            "list_capacities",
            "List every capacity visible to the server.",
            json!({
                "type": "object",
                "properties": {}
            }),
        ),
    ]
}

/// Optional tool sets, appended when their governing flag is active and
/// their transport restriction matches.
#[must_use]
pub fn optional_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor::new(
            "list_dataflows",
            "List dataflows, optionally scoped to a workspace.",
            json!({
                "type": "object",
                "properties": {
                    "workspaceId": { "type": "string" }
                }
            }),
        )
        .gated_by(flags::DATAFLOW_QUERY),
        ToolDescriptor::new(
            "query_dataflow",
            "Evaluate a query against a dataflow and return the rows.",
            json!({
                "type": "object",
                "properties": {
                    "dataflowId": { "type": "string" },
                    "query": { "type": "string" }
                },
                "required": ["dataflowId", "query"]
            }),
        )
        .gated_by(flags::DATAFLOW_QUERY),
        // Device-code sign-in prints a code for the local user, which
        // only makes sense on an interactive stdio session.
        ToolDescriptor::new(
            "device_code_login",
            "Start an interactive device-code sign-in flow and return \
             the user code and verification URI.",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
        .gated_by(flags::DEVICE_CODE_AUTH)
        .restricted_to(Transport::Stdio),
    ]
}
