//! `derive_mcp_endpoint` tool input/output and the shared response payload.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::endpoint::{self, AddressContext, EndpointUrl, Scheme};

pub const ENDPOINT_TOOL_ID: &str = "derive_mcp_endpoint";

/// Port as reported by a browser (`"3000"`) or as a number (`3000`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum PortValue {
    Text(String),
    Number(u16),
}

impl PortValue {
    fn into_raw(self) -> String {
        match self {
            PortValue::Text(text) => text,
            PortValue::Number(number) => number.to_string(),
        }
    }
}

/// Input for `derive_mcp_endpoint`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct EndpointRequest {
    /// Scheme the page was loaded over (`http`/`https`). Informational only.
    #[serde(default)]
    pub scheme: Option<String>,
    /// Hostname the page is served from, without port.
    #[serde(default)]
    pub hostname: Option<String>,
    /// Port the page is served from; omit or leave empty for the default.
    #[serde(default)]
    pub port: Option<PortValue>,
}

impl From<EndpointRequest> for AddressContext {
    fn from(request: EndpointRequest) -> Self {
        AddressContext {
            scheme: request.scheme.as_deref().and_then(Scheme::parse),
            hostname: request.hostname,
            port: request.port.map(PortValue::into_raw),
        }
    }
}

/// Derived endpoint as returned by the tool, the CLI and `/api/endpoint`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EndpointResponse {
    /// Endpoint URL, or an empty string when it cannot be derived.
    pub url: String,
    pub available: bool,
}

impl From<EndpointUrl> for EndpointResponse {
    fn from(url: EndpointUrl) -> Self {
        Self {
            available: url.is_available(),
            url: url.into_string(),
        }
    }
}

pub fn derive_endpoint(request: EndpointRequest) -> EndpointResponse {
    let context = AddressContext::from(request);
    endpoint::derive(Some(&context)).into()
}
