use crate::{
    cli::LaunchProfile,
    endpoint::{self, AddressContext, EndpointUrl},
    server::config::ServerConfig,
};

/// Endpoint URL a client would derive when loading the page from the listen address.
pub fn advertised_endpoint(config: &ServerConfig) -> EndpointUrl {
    let context = AddressContext::new(config.server.host.as_str(), config.server.port.to_string());
    endpoint::derive(Some(&context))
}

/// Build the `ServerInfo.instructions` string shown to MCP clients.
pub fn build_instructions(profile: &LaunchProfile, config: &ServerConfig) -> String {
    format!(
        "Loaded config {path}; waiting in {transport} mode (host={host}, port={port}). Call `derive_mcp_endpoint` with the hostname and port a page is served from to get the MCP endpoint URL; the landing page on this host advertises {endpoint}.",
        path = config.source_path.display(),
        transport = profile.transport.as_str(),
        host = config.server.host,
        port = config.server.port,
        endpoint = advertised_endpoint(config)
    )
}
