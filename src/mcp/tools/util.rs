//! Shared utilities for MCP tool handlers.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::AppError;

/// Deserialize tool-call arguments into a typed input struct.
///
/// # Errors
///
/// Returns `invalid_params` naming the tool when the arguments do not
/// match the input contract.
pub fn parse_input<T: DeserializeOwned>(
    tool: &str,
    args: Option<Map<String, Value>>,
) -> Result<T, rmcp::ErrorData> {
    serde_json::from_value(Value::Object(args.unwrap_or_default())).map_err(|err| {
        rmcp::ErrorData::invalid_params(format!("invalid {tool} parameters: {err}"), None)
    })
}

/// Map an application error onto the MCP error surface.
///
/// Decode failures and missing entities are data problems the caller
/// can correct, so they surface as `invalid_params`; everything else is
/// an internal error. None of these bring the process down.
#[must_use]
pub fn to_error_data(err: AppError) -> rmcp::ErrorData {
    match err {
        AppError::NotFound(msg) => {
            rmcp::ErrorData::invalid_params(format!("not found: {msg}"), None)
        }
        AppError::Decode(err) => rmcp::ErrorData::invalid_params(err.to_string(), None),
        other => rmcp::ErrorData::internal_error(other.to_string(), None),
    }
}
