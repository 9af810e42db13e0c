//! MCP tool handlers, one module per resource family.

pub mod auth;
pub mod capacities;
pub mod connections;
pub mod dataflows;
pub mod gateways;
pub mod pipelines;
pub mod util;
pub mod workspaces;
