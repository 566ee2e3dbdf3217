use tracing::info;

use super::ServerConfig;

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "endpoint_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        trust_forwarded_headers = config.web.trust_forwarded_headers,
        page_title = %config.page.title,
        "Configuration file loaded successfully"
    );
}
