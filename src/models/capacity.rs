//! Capacity read model.

use serde::{Deserialize, Serialize};

/// Provisioning state of a capacity.
///
/// Serialized as the variant's string name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CapacityState {
    /// Capacity is running.
    Active,
    /// Capacity is paused.
    Inactive,
}

/// A compute capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Capacity {
    /// Capacity identifier.
    pub id: String,
    /// Display name.
    pub display_name: String,
    /// SKU name, e.g. `F64`.
    pub sku: String,
    /// Azure region the capacity lives in.
    pub region: String,
    /// Provisioning state.
    pub state: CapacityState,
}
