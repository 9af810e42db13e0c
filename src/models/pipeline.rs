//! Pipeline read model, paging envelope, and display projection.

use serde::{Deserialize, Serialize};

/// A data pipeline summary. Pure projection, never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    /// Pipeline identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item type name.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Owning workspace.
    pub workspace_id: String,
    /// Containing folder, when foldered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

/// Paged listing envelope for pipelines.
///
/// Invariant: `continuationToken` and `continuationUri` are present
/// together or absent together; absence means there are no more pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListPipelinesResponse {
    /// Ordered page of pipeline summaries.
    pub value: Vec<Pipeline>,
    /// Opaque token for fetching the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// Fully-qualified URI for fetching the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_uri: Option<String>,
}

impl ListPipelinesResponse {
    /// A final page with no continuation pair.
    #[must_use]
    pub fn last_page(value: Vec<Pipeline>) -> Self {
        Self {
            value,
            continuation_token: None,
            continuation_uri: None,
        }
    }

    /// An intermediate page. The token and URI always travel together,
    /// which is what upholds the presence invariant.
    #[must_use]
    pub fn page_with_continuation(value: Vec<Pipeline>, token: String, uri: String) -> Self {
        Self {
            value,
            continuation_token: Some(token),
            continuation_uri: Some(uri),
        }
    }

    /// The continuation pair, when a further page exists.
    #[must_use]
    pub fn continuation(&self) -> Option<(&str, &str)> {
        match (&self.continuation_token, &self.continuation_uri) {
            (Some(token), Some(uri)) => Some((token, uri)),
            _ => None,
        }
    }

    /// Whether a further page exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.continuation().is_some()
    }
}

/// Minimal display projection of a [`Pipeline`] used in formatted tool
/// responses. Fixed field subset, no branching.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PipelineInfo {
    /// Pipeline identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// Item type name.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Owning workspace.
    pub workspace_id: String,
}

impl From<&Pipeline> for PipelineInfo {
    fn from(pipeline: &Pipeline) -> Self {
        Self {
            id: pipeline.id.clone(),
            display_name: pipeline.display_name.clone(),
            item_type: pipeline.item_type.clone(),
            workspace_id: pipeline.workspace_id.clone(),
        }
    }
}
