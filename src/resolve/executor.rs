//! Excerpt execution: fetch, disambiguate, format, insert

use super::models::{FlowState, Insertion, Outcome, Resolution};
use crate::config::{normalize_language, Settings};
use crate::error::{ExcerptError, Result};
use crate::format::format_insert;
use crate::host::{Notifier, PromptUser, TextSink};
use crate::wikipedia::{is_ambiguous, next_search_term, parse_extract, Extract, ExtractFetcher};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Drives one excerpt lookup from search term to text sink.
///
/// At most two fetches happen per invocation, strictly one after the other:
/// the second only when the first result is a disambiguation page.
pub struct ExcerptService {
    fetcher: Arc<dyn ExtractFetcher>,
    notifier: Arc<dyn Notifier>,
}

impl ExcerptService {
    pub fn new(fetcher: Arc<dyn ExtractFetcher>, notifier: Arc<dyn Notifier>) -> Self {
        Self { fetcher, notifier }
    }

    /// Search-term entry point: ask the user first
    pub async fn run_with_prompt(
        &self,
        prompt: &dyn PromptUser,
        settings: &Settings,
        sink: &dyn TextSink,
    ) -> Outcome {
        match prompt.prompt() {
            Some(term) => self.resolve_and_format(&term, settings, sink).await,
            None => {
                debug!("Search cancelled at prompt");
                Outcome::Cancelled
            }
        }
    }

    /// Look up `search_term`, format the result and hand it to `sink`.
    ///
    /// Every failure is reported through the notifier exactly once and
    /// leaves the sink untouched.
    pub async fn resolve_and_format(
        &self,
        search_term: &str,
        settings: &Settings,
        sink: &dyn TextSink,
    ) -> Outcome {
        let resolution = match self.resolve(search_term, &settings.language).await {
            Ok(resolution) => resolution,
            Err(err) => return self.fail(search_term, err),
        };

        // Formatting always uses the term the caller supplied, even after
        // following a disambiguation candidate.
        let text = format_insert(&resolution.extract, search_term, settings);

        if let Err(e) = sink.insert(&text) {
            return self.fail(search_term, e.into());
        }

        info!(
            "Inserted excerpt of '{}' for '{}' ({:?})",
            resolution.extract.title,
            search_term,
            resolution.state()
        );
        Outcome::Inserted(Insertion { text, resolution })
    }

    /// Fetch and parse, following one disambiguation page if needed.
    ///
    /// The language is normalized once here so the request and the article
    /// URL always name the same edition.
    pub async fn resolve(&self, search_term: &str, language: &str) -> Result<Resolution> {
        let language = normalize_language(language);
        let language = language.as_str();
        debug!(state = ?FlowState::Fetching, "Looking up '{}'", search_term);

        let extract = self
            .fetch_extract(search_term, language)
            .await?
            .ok_or_else(|| ExcerptError::not_found(search_term))?;

        if !is_ambiguous(&extract) {
            return Ok(Resolution {
                extract,
                candidate: None,
            });
        }

        self.notifier
            .notify("Disambiguation found, choosing first result");

        let unresolved = |candidate: &str| ExcerptError::DisambiguationUnresolved {
            original: search_term.to_string(),
            candidate: candidate.to_string(),
        };

        let candidate = next_search_term(&extract).ok_or_else(|| unresolved(""))?;
        debug!(state = ?FlowState::Disambiguating, "Following candidate '{}'", candidate);

        let resolved = self
            .fetch_extract(&candidate, language)
            .await?
            .ok_or_else(|| unresolved(&candidate))?;

        Ok(Resolution {
            extract: resolved,
            candidate: Some(candidate),
        })
    }

    async fn fetch_extract(&self, search_term: &str, language: &str) -> Result<Option<Extract>> {
        let response = self.fetcher.fetch(search_term, language).await?;
        Ok(parse_extract(&response, language))
    }

    fn fail(&self, search_term: &str, err: ExcerptError) -> Outcome {
        match &err {
            ExcerptError::Io(_) => warn!("Excerpt for '{}' not inserted: {}", search_term, err),
            _ => info!("Excerpt for '{}' ended without insert: {}", search_term, err),
        }
        self.notifier.notify(&err.to_string());
        Outcome::Failed(err)
    }
}
