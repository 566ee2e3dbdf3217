//! HTML rendering for the landing page and its endpoint panel.
use crate::{endpoint::EndpointUrl, server::config::PageSection};

/// How long the copy button shows its confirmation before reverting.
pub const COPY_RESET_MS: u64 = 2000;

const PANEL_HEADING: &str = "MCP Endpoint URL";
const PANEL_HINT: &str = "Use this URL to configure your MCP client connection";
const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "✓ Copied!";

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; font-family: system-ui, sans-serif; background: linear-gradient(135deg, #f8fafc, #eff6ff); color: #1e293b; }
main { max-width: 56rem; margin: 0 auto; padding: 2rem; }
header { text-align: center; margin-bottom: 3rem; }
h1 { font-size: 2.25rem; margin-bottom: 1rem; }
.tagline { font-size: 1.125rem; color: #475569; }
.panel { background: #fff; border: 1px solid #e2e8f0; border-radius: 0.75rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); padding: 1.5rem; margin-bottom: 2rem; }
.panel h3 { font-size: 1.25rem; margin: 0 0 0.75rem; }
.panel p { color: #475569; margin: 0 0 1rem; }
.endpoint { position: relative; }
.endpoint code { display: block; background: #0f172a; color: #4ade80; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; font-size: 0.875rem; }
.endpoint button { position: absolute; top: 0.5rem; right: 0.5rem; background: #334155; color: #fff; border: 0; border-radius: 0.25rem; padding: 0.25rem 0.75rem; font-size: 0.75rem; cursor: pointer; }
.endpoint button:hover { background: #475569; }
"#;

const COPY_SCRIPT: &str = r#"
(() => {
  const button = document.getElementById('copy-endpoint');
  if (!button) return;
  button.addEventListener('click', async () => {
    const url = button.dataset.url;
    if (!url) return;
    try {
      await navigator.clipboard.writeText(url);
      button.textContent = '__COPIED__';
      setTimeout(() => { button.textContent = '__COPY__'; }, __RESET_MS__);
    } catch (error) {
      console.error('Failed to copy MCP endpoint URL:', error);
    }
  });
})();
"#;

/// Render the full landing page. The endpoint panel is left out when the
/// endpoint is unavailable.
pub fn render_page(page: &PageSection, endpoint: &EndpointUrl) -> String {
    let panel = render_endpoint_panel(endpoint).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n<header>\n<h1>{title}</h1>\n<p class=\"tagline\">{tagline}</p>\n</header>\n{panel}</main>\n</body>\n</html>\n",
        title = escape_html(&page.title),
        tagline = escape_html(&page.tagline),
    )
}

/// Endpoint panel markup, or `None` when there is nothing to show.
pub fn render_endpoint_panel(endpoint: &EndpointUrl) -> Option<String> {
    if !endpoint.is_available() {
        return None;
    }
    let url = escape_html(endpoint.as_str());
    let script = COPY_SCRIPT
        .replace("__COPIED__", COPIED_LABEL)
        .replace("__COPY__", COPY_LABEL)
        .replace("__RESET_MS__", &COPY_RESET_MS.to_string());

    Some(format!(
        "<section class=\"panel\">\n<h3>{PANEL_HEADING}</h3>\n<p>{PANEL_HINT}</p>\n<div class=\"endpoint\">\n<code>{url}</code>\n<button type=\"button\" id=\"copy-endpoint\" data-url=\"{url}\">{COPY_LABEL}</button>\n</div>\n<script>{script}</script>\n</section>\n"
    ))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
