//! Shared test helpers for server-level integration tests.
//!
//! Provides reusable construction of `AppState`, seeded in-memory
//! platforms, and sample records so individual test modules can focus
//! on behaviour rather than boilerplate.

use std::collections::HashMap;
use std::sync::Arc;

use fabric_mcp::codec::connection::{
    Connection, ConnectionDetails, ConnectionType, ConnectivityType,
};
use fabric_mcp::codec::credentials::Credentials;
use fabric_mcp::codec::gateway::{Gateway, OnPremisesPersonalGateway, PublicKey};
use fabric_mcp::config::GlobalConfig;
use fabric_mcp::flags::FeatureFlags;
use fabric_mcp::mcp::catalog;
use fabric_mcp::mcp::handler::AppState;
use fabric_mcp::models::dataflow::Dataflow;
use fabric_mcp::models::pipeline::Pipeline;
use fabric_mcp::models::workspace::Workspace;
use fabric_mcp::registry::{Composer, Transport};
use fabric_mcp::services::memory::MemoryPlatform;

/// Resolve flags from CLI-style switch tokens with an empty config
/// table.
pub fn flags_from(switches: &[&str]) -> FeatureFlags {
    FeatureFlags::resolve(switches.iter().copied(), &HashMap::new())
}

/// Build a complete `AppState` around the given platform, composing
/// the real declared catalog for the given switches and transport.
pub fn app_state(
    platform: MemoryPlatform,
    switches: &[&str],
    transport: Transport,
) -> Arc<AppState> {
    let config = Arc::new(GlobalConfig::default());
    let flags = flags_from(switches);
    let mut composer = Composer::new(catalog::base_tools(), catalog::optional_tools());
    let registry = composer
        .compose_once(&flags, transport)
        .expect("declared catalog composes");
    Arc::new(AppState {
        config,
        flags,
        registry: Arc::new(registry),
        platform: Arc::new(platform),
    })
}

/// A minimal valid connection record.
pub fn sample_connection(id: &str) -> Connection {
    Connection {
        id: id.to_owned(),
        display_name: format!("Connection {id}"),
        description: None,
        connectivity_type: ConnectivityType::ShareableCloud,
        workspace_id: Some("ws-1".to_owned()),
        gateway_id: None,
        details: ConnectionDetails {
            connection_type: ConnectionType::Web,
            path: Some("https://example.invalid/feed".to_owned()),
            parameters: Vec::new(),
        },
        credential_details: Credentials::Anonymous,
    }
}

/// A minimal personal gateway record.
pub fn sample_gateway(id: &str) -> Gateway {
    Gateway::OnPremisesPersonal(OnPremisesPersonalGateway {
        id: id.to_owned(),
        public_key: PublicKey {
            exponent: "AQAB".to_owned(),
            modulus: "test-modulus".to_owned(),
        },
        version: "3000.0.1".to_owned(),
    })
}

/// A workspace record.
pub fn sample_workspace(id: &str) -> Workspace {
    Workspace {
        id: id.to_owned(),
        display_name: format!("Workspace {id}"),
        description: None,
        capacity_id: None,
    }
}

/// A pipeline record in the given workspace.
pub fn sample_pipeline(id: &str, workspace_id: &str) -> Pipeline {
    Pipeline {
        id: id.to_owned(),
        display_name: format!("Pipeline {id}"),
        description: None,
        item_type: "DataPipeline".to_owned(),
        workspace_id: workspace_id.to_owned(),
        folder_id: None,
    }
}

/// A dataflow record in the given workspace.
pub fn sample_dataflow(id: &str, workspace_id: &str) -> Dataflow {
    Dataflow {
        id: id.to_owned(),
        display_name: format!("Dataflow {id}"),
        description: None,
        workspace_id: workspace_id.to_owned(),
    }
}
