use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_PAGE_TITLE: &str = "Browser-use mcp";
pub const DEFAULT_PAGE_TAGLINE: &str = "use browser-use rest api as a mcp easily";

/// Text shown in the landing page header.
#[derive(Debug, Clone)]
pub struct PageSection {
    pub title: String,
    pub tagline: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            tagline: DEFAULT_PAGE_TAGLINE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawPageSection {
    pub title: Option<String>,
    pub tagline: Option<String>,
}

pub fn parse_page_section(
    raw: Option<RawPageSection>,
    path: &Path,
) -> Result<PageSection, ConfigError> {
    let page_raw = raw.unwrap_or_default();
    let title = page_raw
        .title
        .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());
    if title.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "page.title",
            message: "Title must not be blank".into(),
        });
    }
    let tagline = page_raw
        .tagline
        .unwrap_or_else(|| DEFAULT_PAGE_TAGLINE.to_string());

    Ok(PageSection { title, tagline })
}
