#![forbid(unsafe_code)]

//! `fabric-mcp` — MCP server for a cloud data-integration platform.
//!
//! Exposes platform operations (connections, gateways, workspaces,
//! pipelines, dataflows, capacities) as MCP tools over stdio or
//! HTTP/SSE. The tool catalog is composed once at startup from a base
//! set plus feature-flag-gated optional sets; resource payloads are
//! round-tripped through a polymorphic wire codec.

pub mod codec;
pub mod config;
pub mod errors;
pub mod flags;
pub mod mcp;
pub mod models;
pub mod registry;
pub mod services;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
