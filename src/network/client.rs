//! HTTP client for requests to the Wikipedia API

use crate::config::OutgoingSettings;
use crate::error::{ExcerptError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Identifying user agent, as the Wikimedia API etiquette asks for
pub fn user_agent(suffix: Option<&str>) -> String {
    let base = format!("wiki-excerpt/{}", crate::VERSION);
    match suffix {
        Some(s) if !s.trim().is_empty() => format!("{} {}", base, s.trim()),
        _ => base,
    }
}

/// HTTP client wrapper with wiki-excerpt specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true);

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: user_agent(settings.useragent_suffix.as_deref()),
        })
    }

    /// GET a URL and decode the body as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExcerptError::fetch(format!("HTTP error: {}", status)));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_user_agent_suffix() {
        assert!(user_agent(None).starts_with("wiki-excerpt/"));
        assert!(user_agent(Some("(me@example.org)")).ends_with(" (me@example.org)"));
        assert_eq!(user_agent(Some("  ")), user_agent(None));
    }
}
