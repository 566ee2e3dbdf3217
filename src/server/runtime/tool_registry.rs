use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{ErrorData, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, Json,
};

use crate::{
    lib::telemetry,
    server::config::ServerConfig,
    tools::{self, EndpointRequest, EndpointResponse, ServerToolRouter},
};

#[derive(Clone)]
pub struct EndpointServer {
    config: Arc<ServerConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl EndpointServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router: router,
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[tool_router(router = tool_router)]
impl EndpointServer {
    #[tool(
        name = "derive_mcp_endpoint",
        description = "Derive the MCP endpoint URL clients should use for a page served at the given hostname and port"
    )]
    async fn derive_mcp_endpoint(
        &self,
        Parameters(request): Parameters<EndpointRequest>,
    ) -> Result<Json<EndpointResponse>, ErrorData> {
        let response = tools::derive_endpoint(request);
        telemetry::emit_endpoint_served("mcp_tool", &response.url);
        Ok(Json(response))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for EndpointServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }
}
