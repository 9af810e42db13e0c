//! MCP server handler, shared application state, and tool router.

use std::future::Future;
use std::sync::Arc;

use rmcp::handler::server::{
    tool::{ToolCallContext, ToolRoute, ToolRouter},
    ServerHandler,
};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam, Tool,
};
use rmcp::service::{RequestContext, RoleServer};
use tracing::info_span;

use crate::config::GlobalConfig;
use crate::flags::FeatureFlags;
use crate::registry::{ToolDescriptor, ToolRegistry};
use crate::services::Platform;

/// Shared application state accessible by all MCP tool handlers.
///
/// Built once at startup; the flag map and composed registry are
/// read-only for the process lifetime.
pub struct AppState {
    /// Global configuration.
    pub config: Arc<GlobalConfig>,
    /// Resolved feature flags.
    pub flags: FeatureFlags,
    /// The composed tool registry.
    pub registry: Arc<ToolRegistry>,
    /// Platform service backend.
    pub platform: Arc<dyn Platform>,
}

/// MCP server implementation that exposes the composed tool catalog.
pub struct FabricServer {
    state: Arc<AppState>,
}

impl FabricServer {
    /// Create a new MCP server bound to shared application state.
    #[must_use]
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Access the shared application state.
    #[must_use]
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// The advertised tool list, exactly the composed registry.
    #[must_use]
    pub fn advertised_tools(&self) -> Vec<Tool> {
        self.state
            .registry
            .tools()
            .iter()
            .map(Self::to_tool)
            .collect()
    }

    /// Convert a registry descriptor into the `rmcp` advertisement
    /// shape.
    fn to_tool(descriptor: &ToolDescriptor) -> Tool {
        Tool {
            name: descriptor.name.clone().into(),
            description: Some(descriptor.description.clone().into()),
            input_schema: Self::schema(descriptor.input_schema.clone()),
            output_schema: None,
            annotations: None,
            title: None,
            icons: None,
            meta: None,
        }
    }

    /// Convert a `serde_json::Value::Object` into the `Arc<Map>` expected by `Tool`.
    fn schema(value: serde_json::Value) -> Arc<serde_json::Map<String, serde_json::Value>> {
        match value {
            serde_json::Value::Object(map) => Arc::new(map),
            _ => Arc::new(serde_json::Map::default()),
        }
    }

    fn tool_router(&self) -> ToolRouter<Self> {
        use crate::mcp::tools::{auth, capacities, connections, dataflows, gateways, pipelines, workspaces};

        let mut router = ToolRouter::new();

        for descriptor in self.state.registry.tools() {
            let tool = Self::to_tool(descriptor);
            match descriptor.name.as_str() {
                "list_connections" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(connections::list(context))
                    }));
                }
                "get_connection" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(connections::get(context))
                    }));
                }
                "create_connection" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(connections::create(context))
                    }));
                }
                "update_connection" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(connections::update(context))
                    }));
                }
                "delete_connection" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(connections::delete(context))
                    }));
                }
                "list_gateways" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(gateways::list(context))
                    }));
                }
                "get_gateway" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(gateways::get(context))
                    }));
                }
                "list_workspaces" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(workspaces::list(context))
                    }));
                }
                "list_pipelines" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(pipelines::list(context))
                    }));
                }
                "list_capacities" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(capacities::list(context))
                    }));
                }
                "list_dataflows" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(dataflows::list(context))
                    }));
                }
                "query_dataflow" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(dataflows::query(context))
                    }));
                }
                "device_code_login" => {
                    router.add_route(ToolRoute::new_dyn(tool, |context| {
                        Box::pin(auth::device_code_login(context))
                    }));
                }
                _ => {
                    router.add_route(ToolRoute::new_dyn(tool, |_context| {
                        Box::pin(async {
                            Err(rmcp::ErrorData::internal_error(
                                "tool not implemented",
                                None,
                            ))
                        })
                    }));
                }
            }
        }

        router
    }
}

impl ServerHandler for FabricServer {
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_ {
        let router = self.tool_router();
        let _span = info_span!("call_tool", tool = %request.name).entered();

        async move {
            router
                .call(ToolCallContext::new(self, request, context))
                .await
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_ {
        let tools = self.advertised_tools();

        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }
}
