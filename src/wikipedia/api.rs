//! Wikipedia extract API client

use super::response::QueryResult;
use crate::config::normalize_language;
use crate::error::{ExcerptError, Result};
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::debug;

/// Source of raw extract query results
#[async_trait]
pub trait ExtractFetcher: Send + Sync {
    /// Query the extract endpoint for `search_term` in the given language edition
    async fn fetch(&self, search_term: &str, language: &str) -> Result<QueryResult>;
}

/// Wikipedia `api.php` extract endpoint
pub struct WikipediaApi {
    client: HttpClient,
    api_base: String,
}

impl WikipediaApi {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            api_base: "https://{lang}.wikipedia.org".to_string(),
        }
    }

    /// Override the host; `{lang}` is replaced by the language code
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Full request URL for a search term
    pub fn request_url(&self, search_term: &str, language: &str) -> String {
        let base = self
            .api_base
            .replace("{lang}", &normalize_language(language));
        format!(
            "{}/w/api.php?format=json&action=query&prop=extracts&explaintext=1&redirects&origin=*&titles={}",
            base.trim_end_matches('/'),
            urlencoding::encode(search_term)
        )
    }
}

#[async_trait]
impl ExtractFetcher for WikipediaApi {
    async fn fetch(&self, search_term: &str, language: &str) -> Result<QueryResult> {
        debug!("Fetching extract for '{}' ({})", search_term, language);

        let url = self.request_url(search_term, language);
        let result: QueryResult = self.client.get_json(&url).await?;

        if let Some(ref err) = result.error {
            return Err(ExcerptError::fetch(format!(
                "API error {}: {}",
                err.code, err.info
            )));
        }
        if result.query.is_none() {
            return Err(ExcerptError::fetch("response has no query section"));
        }

        Ok(result)
    }
}
