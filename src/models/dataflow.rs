//! Dataflow read model and query result.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A dataflow summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dataflow {
    /// Dataflow identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Result of evaluating a query against a dataflow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataflowQueryResult {
    /// Dataflow the query ran against.
    pub dataflow_id: String,
    /// The query text as submitted.
    pub query: String,
    /// Number of rows returned.
    pub row_count: u64,
    /// Result rows as wire-shaped records.
    pub rows: Vec<Value>,
}
