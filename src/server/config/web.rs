use serde::Deserialize;

/// Landing page behaviour behind proxies.
#[derive(Debug, Clone, Default)]
pub struct WebSection {
    /// Prefer `X-Forwarded-Host` / `X-Forwarded-Proto` over `Host`.
    pub trust_forwarded_headers: bool,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawWebSection {
    pub trust_forwarded_headers: Option<bool>,
}

pub fn parse_web_section(raw: Option<RawWebSection>) -> WebSection {
    let web_raw = raw.unwrap_or_default();
    WebSection {
        trust_forwarded_headers: web_raw.trust_forwarded_headers.unwrap_or(false),
    }
}
