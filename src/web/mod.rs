//! HTTP front-end: landing page, endpoint JSON and the streamable HTTP MCP service.
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::State, http::HeaderMap, response::Html, routing::get, Json, Router};
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    endpoint::{self, EndpointUrl, RequestAddress},
    lib::telemetry,
    server::{config::ServerConfig, runtime::EndpointServer},
    tools::EndpointResponse,
};

pub mod page;

pub use page::{render_page, COPY_RESET_MS};

/// Shared state for the page handlers.
#[derive(Clone)]
pub struct WebState {
    config: Arc<ServerConfig>,
}

impl WebState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn endpoint_for(&self, headers: &HeaderMap) -> EndpointUrl {
        let source = RequestAddress::new(headers, self.config.web.trust_forwarded_headers);
        endpoint::derive_from(&source)
    }
}

/// Routes for the landing page and endpoint lookup, without the MCP service.
pub fn page_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/api/endpoint", get(endpoint_json))
        .with_state(state)
}

/// Full application: page routes plus MCP over streamable HTTP at `/mcp`.
pub fn app(server: EndpointServer) -> Router {
    let state = WebState::new(server.config().clone());
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    page_router(state).nest_service(endpoint::ENDPOINT_PATH, mcp_service)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(server: EndpointServer, config: &ServerConfig) -> Result<()> {
    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind HTTP port {addr}"))?;
    info!(
        target: "endpoint_mcp::web",
        transport = "http",
        bind_addr = %addr,
        "Started listening in HTTP mode"
    );

    axum::serve(listener, app(server))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            target: "endpoint_mcp::web",
            error = %err,
            "Failed to listen for Ctrl-C; shutting down"
        );
    }
}

async fn landing_page(State(state): State<WebState>, headers: HeaderMap) -> Html<String> {
    let endpoint = state.endpoint_for(&headers);
    telemetry::emit_endpoint_served("landing_page", endpoint.as_str());
    Html(render_page(&state.config.page, &endpoint))
}

async fn endpoint_json(State(state): State<WebState>, headers: HeaderMap) -> Json<EndpointResponse> {
    let endpoint = state.endpoint_for(&headers);
    telemetry::emit_endpoint_served("api", endpoint.as_str());
    Json(endpoint.into())
}
