//! Platform service interface.
//!
//! Each platform service exposes asynchronous operations taking and
//! returning plain data records. The wire codec is invoked at the edges
//! of these calls by the tool handlers, never inside the service logic.

pub mod memory;

use async_trait::async_trait;

use crate::codec::connection::Connection;
use crate::codec::gateway::Gateway;
use crate::models::auth::DeviceCodeLogin;
use crate::models::capacity::Capacity;
use crate::models::dataflow::{Dataflow, DataflowQueryResult};
use crate::models::pipeline::ListPipelinesResponse;
use crate::models::workspace::Workspace;
use crate::Result;

/// The narrow interface the tool handlers consume.
///
/// Implementations must be safe to call concurrently; every operation
/// is self-contained and returns owned data.
#[async_trait]
pub trait Platform: Send + Sync {
    /// List all connections.
    async fn list_connections(&self) -> Result<Vec<Connection>>;

    /// Fetch a connection by identifier.
    async fn get_connection(&self, id: &str) -> Result<Connection>;

    /// Create a connection and return the stored record.
    async fn create_connection(&self, connection: Connection) -> Result<Connection>;

    /// Replace an existing connection, matched by its identifier.
    async fn update_connection(&self, connection: Connection) -> Result<Connection>;

    /// Delete a connection by identifier.
    async fn delete_connection(&self, id: &str) -> Result<()>;

    /// List all gateways.
    async fn list_gateways(&self) -> Result<Vec<Gateway>>;

    /// Fetch a gateway by identifier.
    async fn get_gateway(&self, id: &str) -> Result<Gateway>;

    /// List all workspaces.
    async fn list_workspaces(&self) -> Result<Vec<Workspace>>;

    /// List pipelines, optionally scoped to a workspace, one page at a
    /// time.
    async fn list_pipelines(
        &self,
        workspace_id: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ListPipelinesResponse>;

    /// List all capacities.
    async fn list_capacities(&self) -> Result<Vec<Capacity>>;

    /// List dataflows, optionally scoped to a workspace.
    async fn list_dataflows(&self, workspace_id: Option<&str>) -> Result<Vec<Dataflow>>;

    /// Evaluate a query against a dataflow.
    async fn query_dataflow(&self, dataflow_id: &str, query: &str)
        -> Result<DataflowQueryResult>;

    /// Initiate a device-code sign-in flow.
    async fn begin_device_code_login(&self) -> Result<DeviceCodeLogin>;
}
