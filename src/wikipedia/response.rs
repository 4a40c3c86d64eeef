//! Extract query response types and parsing

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Page key the API uses when a title does not resolve
pub const MISSING_PAGE_KEY: &str = "-1";

/// Decoded body of an `action=query&prop=extracts` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub query: Option<QueryPages>,
    /// Present instead of `query` when the API rejects the request
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryPages {
    /// Keyed by page id; kept in document order
    #[serde(default)]
    pub pages: IndexMap<String, Page>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub extract: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub info: String,
}

/// Plain-text article extract for a resolved title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extract {
    pub title: String,
    /// Full plain text; sections start at `==` headings
    pub text: String,
    pub url: String,
}

impl Extract {
    pub fn new(title: impl Into<String>, text: impl Into<String>, language: &str) -> Self {
        let title = title.into();
        let url = article_url(language, &title);
        Self {
            title,
            text: text.into(),
            url,
        }
    }
}

/// Canonical article URL for a title
pub fn article_url(language: &str, title: &str) -> String {
    format!(
        "https://{}.wikipedia.org/wiki/{}",
        language,
        urlencoding::encode(title)
    )
}

/// Turn a query result into an extract.
///
/// Returns `None` when the title did not resolve: the `-1` key is checked
/// before any page is read. Otherwise the first page in document order wins.
pub fn parse_extract(response: &QueryResult, language: &str) -> Option<Extract> {
    let pages = &response.query.as_ref()?.pages;

    if pages.contains_key(MISSING_PAGE_KEY) {
        return None;
    }

    let (_, page) = pages.first()?;
    Some(Extract::new(
        page.title.clone(),
        page.extract.clone().unwrap_or_default(),
        language,
    ))
}
