//! In-memory platform implementation.
//!
//! Backs the server when no remote endpoint is configured (local-only
//! mode) and serves as the substrate for integration tests. All state
//! lives behind a single mutex; operations clone out owned records.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::codec::connection::Connection;
use crate::codec::gateway::Gateway;
use crate::models::auth::DeviceCodeLogin;
use crate::models::capacity::Capacity;
use crate::models::dataflow::{Dataflow, DataflowQueryResult};
use crate::models::pipeline::{ListPipelinesResponse, Pipeline};
use crate::models::workspace::Workspace;
use crate::services::Platform;
use crate::{AppError, Result};

#[derive(Debug, Default)]
struct Inner {
    connections: Vec<Connection>,
    gateways: Vec<Gateway>,
    workspaces: Vec<Workspace>,
    pipelines: Vec<Pipeline>,
    capacities: Vec<Capacity>,
    dataflows: Vec<Dataflow>,
}

/// Mutex-guarded in-memory platform store.
#[derive(Debug)]
pub struct MemoryPlatform {
    page_size: usize,
    inner: Mutex<Inner>,
}

impl MemoryPlatform {
    /// Create an empty store with the given pipeline page size.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Seed a gateway record.
    pub async fn seed_gateway(&self, gateway: Gateway) {
        self.inner.lock().await.gateways.push(gateway);
    }

    /// Seed a workspace record.
    pub async fn seed_workspace(&self, workspace: Workspace) {
        self.inner.lock().await.workspaces.push(workspace);
    }

    /// Seed a pipeline record.
    pub async fn seed_pipeline(&self, pipeline: Pipeline) {
        self.inner.lock().await.pipelines.push(pipeline);
    }

    /// Seed a capacity record.
    pub async fn seed_capacity(&self, capacity: Capacity) {
        self.inner.lock().await.capacities.push(capacity);
    }

    /// Seed a dataflow record.
    pub async fn seed_dataflow(&self, dataflow: Dataflow) {
        self.inner.lock().await.dataflows.push(dataflow);
    }
}

#[async_trait]
impl Platform for MemoryPlatform {
    async fn list_connections(&self) -> Result<Vec<Connection>> {
        Ok(self.inner.lock().await.connections.clone())
    }

    async fn get_connection(&self, id: &str) -> Result<Connection> {
        self.inner
            .lock()
            .await
            .connections
            .iter()
            .find(|connection| connection.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("connection {id}")))
    }

    async fn create_connection(&self, mut connection: Connection) -> Result<Connection> {
        let mut inner = self.inner.lock().await;
        if connection.id.is_empty() {
            connection.id = Uuid::new_v4().to_string();
        }
        if inner.connections.iter().any(|c| c.id == connection.id) {
            return Err(AppError::Platform(format!(
                "connection {} already exists",
                connection.id
            )));
        }
        inner.connections.push(connection.clone());
        Ok(connection)
    }

    async fn update_connection(&self, connection: Connection) -> Result<Connection> {
        let mut inner = self.inner.lock().await;
        let Some(slot) = inner
            .connections
            .iter_mut()
            .find(|c| c.id == connection.id)
        else {
            return Err(AppError::NotFound(format!("connection {}", connection.id)));
        };
        *slot = connection.clone();
        Ok(connection)
    }

    async fn delete_connection(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let before = inner.connections.len();
        inner.connections.retain(|connection| connection.id != id);
        if inner.connections.len() == before {
            return Err(AppError::NotFound(format!("connection {id}")));
        }
        Ok(())
    }

    async fn list_gateways(&self) -> Result<Vec<Gateway>> {
        Ok(self.inner.lock().await.gateways.clone())
    }

    async fn get_gateway(&self, id: &str) -> Result<Gateway> {
        self.inner
            .lock()
            .await
            .gateways
            .iter()
            .find(|gateway| gateway.id() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("gateway {id}")))
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.inner.lock().await.workspaces.clone())
    }

    async fn list_pipelines(
        &self,
        workspace_id: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ListPipelinesResponse> {
        let inner = self.inner.lock().await;
        let filtered: Vec<&Pipeline> = inner
            .pipelines
            .iter()
            .filter(|pipeline| {
                workspace_id.is_none_or(|workspace| pipeline.workspace_id == workspace)
            })
            .collect();

        let offset = match continuation_token {
            None => 0,
            Some(token) => token.parse::<usize>().map_err(|_| {
                AppError::Platform(format!("invalid continuation token '{token}'"))
            })?,
        };

        let end = offset.saturating_add(self.page_size).min(filtered.len());
        let page: Vec<Pipeline> = filtered
            .get(offset..end)
            .unwrap_or_default()
            .iter()
            .map(|pipeline| (*pipeline).clone())
            .collect();

        if end < filtered.len() {
            let token = end.to_string();
            let uri = format!("/v1/pipelines?continuationToken={token}");
            Ok(ListPipelinesResponse::page_with_continuation(
                page, token, uri,
            ))
        } else {
            Ok(ListPipelinesResponse::last_page(page))
        }
    }

    async fn list_capacities(&self) -> Result<Vec<Capacity>> {
        Ok(self.inner.lock().await.capacities.clone())
    }

    async fn list_dataflows(&self, workspace_id: Option<&str>) -> Result<Vec<Dataflow>> {
        Ok(self
            .inner
            .lock()
            .await
            .dataflows
            .iter()
            .filter(|dataflow| {
                workspace_id.is_none_or(|workspace| dataflow.workspace_id == workspace)
            })
            .cloned()
            .collect())
    }

    async fn query_dataflow(
        &self,
        dataflow_id: &str,
        query: &str,
    ) -> Result<DataflowQueryResult> {
        let inner = self.inner.lock().await;
        if !inner.dataflows.iter().any(|d| d.id == dataflow_id) {
            return Err(AppError::NotFound(format!("dataflow {dataflow_id}")));
        }
        // Local-only mode has no evaluation engine; an empty result set
        // still exercises the full request/response path.
        Ok(DataflowQueryResult {
            dataflow_id: dataflow_id.to_owned(),
            query: query.to_owned(),
            row_count: 0,
            rows: Vec::new(),
        })
    }

    async fn begin_device_code_login(&self) -> Result<DeviceCodeLogin> {
        let code = Uuid::new_v4().simple().to_string();
        let user_code = code.get(..8).unwrap_or(&code).to_uppercase();
        Ok(DeviceCodeLogin {
            user_code,
            verification_uri: "https://login.fabric.local/device".to_owned(),
            expires_at: Utc::now() + Duration::minutes(15),
            interval_seconds: 5,
        })
    }
}
