//! MCP endpoint URL derivation from an addressing context.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::error;

pub mod context;

pub use context::{AddressSource, RequestAddress, UrlAddress};

/// Path appended to every derived endpoint.
pub const ENDPOINT_PATH: &str = "/mcp";

/// Hostnames treated as same-machine addressing.
pub const LOCAL_ALIASES: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0"];

/// Network scheme of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[serde(alias = "http:")]
    Http,
    #[serde(alias = "https:")]
    Https,
}

impl Scheme {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    /// Port implied when none is written.
    pub const fn default_port(&self) -> &'static str {
        match self {
            Scheme::Http => "80",
            Scheme::Https => "443",
        }
    }

    /// Parse `http`/`https`, tolerating a trailing `:` as browsers report it.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_end_matches(':').to_ascii_lowercase().as_str() {
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the client is currently being served from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressContext {
    /// Scheme the page was loaded over. Recorded but not used for selection.
    #[serde(default)]
    pub scheme: Option<Scheme>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<String>,
}

impl AddressContext {
    pub fn new(hostname: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            scheme: None,
            hostname: Some(hostname.into()),
            port: Some(port.into()),
        }
    }

    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = Some(scheme);
        self
    }
}

/// Derived endpoint URL. The empty string means "unavailable".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EndpointUrl(String);

impl EndpointUrl {
    pub fn unavailable() -> Self {
        Self(String::new())
    }

    pub fn is_available(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EndpointUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true if `hostname` is exactly one of [`LOCAL_ALIASES`].
pub fn is_local_alias(hostname: &str) -> bool {
    LOCAL_ALIASES.iter().any(|alias| *alias == hostname)
}

/// Local aliases are served over plain http, everything else over https.
pub fn select_scheme(hostname: &str) -> Scheme {
    if is_local_alias(hostname) {
        Scheme::Http
    } else {
        Scheme::Https
    }
}

/// A port is written only when present and not the default of `scheme`.
pub fn should_include_port(scheme: Scheme, port: &str) -> bool {
    !port.is_empty() && port != scheme.default_port()
}

/// Derive the endpoint URL for `context`.
///
/// Returns [`EndpointUrl::unavailable`] when there is no context or no
/// hostname. The scheme carried by the context is ignored; see
/// [`select_scheme`].
pub fn derive(context: Option<&AddressContext>) -> EndpointUrl {
    let Some(context) = context else {
        return EndpointUrl::unavailable();
    };
    let hostname = match context.hostname.as_deref() {
        Some(hostname) if !hostname.is_empty() => hostname,
        _ => return EndpointUrl::unavailable(),
    };

    let scheme = select_scheme(hostname);
    let port = context.port.as_deref().unwrap_or_default();
    let port_suffix = if should_include_port(scheme, port) {
        format!(":{port}")
    } else {
        String::new()
    };

    EndpointUrl(format!("{scheme}://{hostname}{port_suffix}{ENDPOINT_PATH}"))
}

/// Read the context from `source` and derive from it; source failures are
/// logged and yield an unavailable endpoint.
pub fn derive_from<S>(source: &S) -> EndpointUrl
where
    S: AddressSource + ?Sized,
{
    match source.address_context() {
        Ok(context) => derive(context.as_ref()),
        Err(err) => {
            error!(
                target: "endpoint_mcp::endpoint",
                reason = %err,
                "Error generating MCP endpoint URL"
            );
            EndpointUrl::unavailable()
        }
    }
}
