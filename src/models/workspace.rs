//! Workspace read model.

use serde::{Deserialize, Serialize};

/// A platform workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Workspace identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Capacity the workspace is assigned to, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_id: Option<String>,
}
