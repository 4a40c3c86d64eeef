//! Settings structures for wiki-excerpt configuration

use crate::error::{ExcerptError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TEMPLATE: &str = "{{text}}\n> [Wikipedia]({{url}})";
pub const DEFAULT_PARAGRAPH_TEMPLATE: &str = "> {{paragraphText}}\n>\n";

/// Formatting and lookup settings, persisted by a [`super::SettingsStore`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Wikipedia language edition (ISO code)
    pub language: String,
    /// Template for the inserted text; supports `{{text}}`, `{{searchTerm}}`, `{{url}}`
    pub template: String,
    /// Template applied to each lead paragraph; supports `{{paragraphText}}`
    pub paragraph_template: String,
    /// Render paragraphs through `paragraph_template`
    pub use_paragraph_template: bool,
    /// Emphasize the first mention of the search term
    pub bold_search_term: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            template: DEFAULT_TEMPLATE.to_string(),
            paragraph_template: DEFAULT_PARAGRAPH_TEMPLATE.to_string(),
            use_paragraph_template: true,
            bold_search_term: true,
        }
    }
}

impl Settings {
    /// Overlay whatever was stored onto the defaults, one field at a time
    pub fn merged(stored: StoredSettings) -> Self {
        let defaults = Self::default();
        Self {
            language: stored
                .language
                .map(|l| normalize_language(&l))
                .unwrap_or(defaults.language),
            template: stored.template.unwrap_or(defaults.template),
            paragraph_template: stored
                .paragraph_template
                .unwrap_or(defaults.paragraph_template),
            use_paragraph_template: stored
                .use_paragraph_template
                .unwrap_or(defaults.use_paragraph_template),
            bold_search_term: stored
                .bold_search_term
                .unwrap_or(defaults.bold_search_term),
        }
    }

    /// Apply a single-field update
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::Language(lang) => self.language = normalize_language(&lang),
            SettingsUpdate::Template(t) => self.template = t,
            SettingsUpdate::ParagraphTemplate(t) => self.paragraph_template = t,
            SettingsUpdate::UseParagraphTemplate(v) => self.use_paragraph_template = v,
            SettingsUpdate::BoldSearchTerm(v) => self.bold_search_term = v,
        }
    }

    /// Merge with environment variables (WIKI_EXCERPT_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(env_var);
    }

    /// Apply overrides from any variable source
    pub fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("WIKI_EXCERPT_LANGUAGE") {
            self.language = normalize_language(&val);
        }
        if let Some(val) = var("WIKI_EXCERPT_BOLD") {
            if let Some(v) = parse_bool(&val) {
                self.bold_search_term = v;
            }
        }
        if let Some(val) = var("WIKI_EXCERPT_USE_PARAGRAPH_TEMPLATE") {
            if let Some(v) = parse_bool(&val) {
                self.use_paragraph_template = v;
            }
        }
    }
}

/// Settings as they come back from a store: any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoredSettings {
    pub language: Option<String>,
    pub template: Option<String>,
    pub paragraph_template: Option<String>,
    pub use_paragraph_template: Option<bool>,
    pub bold_search_term: Option<bool>,
}

impl From<&Settings> for StoredSettings {
    fn from(settings: &Settings) -> Self {
        Self {
            language: Some(settings.language.clone()),
            template: Some(settings.template.clone()),
            paragraph_template: Some(settings.paragraph_template.clone()),
            use_paragraph_template: Some(settings.use_paragraph_template),
            bold_search_term: Some(settings.bold_search_term),
        }
    }
}

/// One settings field change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsUpdate {
    Language(String),
    Template(String),
    ParagraphTemplate(String),
    UseParagraphTemplate(bool),
    BoldSearchTerm(bool),
}

impl SettingsUpdate {
    /// Parse a `field value` pair as typed on the command line.
    ///
    /// Field names are accepted in camelCase, snake_case or kebab-case.
    /// Template values have `\n`, `\t` and `\\` escapes expanded.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        let key: String = field
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "language" | "lang" => Ok(Self::Language(value.to_string())),
            "template" => Ok(Self::Template(unescape(value))),
            "paragraphtemplate" => Ok(Self::ParagraphTemplate(unescape(value))),
            "useparagraphtemplate" => parse_bool(value)
                .map(Self::UseParagraphTemplate)
                .ok_or_else(|| invalid_bool(field, value)),
            "boldsearchterm" | "bold" => parse_bool(value)
                .map(Self::BoldSearchTerm)
                .ok_or_else(|| invalid_bool(field, value)),
            _ => Err(ExcerptError::settings(format!("unknown field '{}'", field))),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Appended to the client's user agent
    pub useragent_suffix: Option<String>,
    /// Proxy for all requests
    pub proxy: Option<String>,
    /// Base URL template for the API; `{lang}` is replaced by the language
    pub api_base: String,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            useragent_suffix: None,
            proxy: None,
            api_base: "https://{lang}.wikipedia.org".to_string(),
        }
    }
}

impl OutgoingSettings {
    pub fn merge_env(&mut self) {
        self.merge_vars(env_var);
    }

    pub fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("WIKI_EXCERPT_TIMEOUT") {
            if let Ok(timeout) = val.parse::<f64>() {
                if timeout > 0.0 {
                    self.request_timeout = timeout.min(crate::MAX_TIMEOUT as f64);
                }
            }
        }
        if let Some(val) = var("WIKI_EXCERPT_PROXY") {
            self.proxy = Some(val);
        }
        if let Some(val) = var("WIKI_EXCERPT_API_BASE") {
            self.api_base = val;
        }
    }
}

/// Reduce a language tag to the edition code (`en-US` -> `en`)
pub fn normalize_language(lang: &str) -> String {
    let base = lang.trim().split(['-', '_']).next().unwrap_or_default();
    if base.is_empty() {
        DEFAULT_LANGUAGE.to_string()
    } else {
        base.to_lowercase()
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn invalid_bool(field: &str, value: &str) -> ExcerptError {
    ExcerptError::settings(format!("'{}' expects true or false, got '{}'", field, value))
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.language, "en");
        assert_eq!(settings.template, "{{text}}\n> [Wikipedia]({{url}})");
        assert!(settings.use_paragraph_template);
        assert!(settings.bold_search_term);
    }

    #[test]
    fn test_merge_is_field_by_field() {
        let stored = StoredSettings {
            language: Some("de".to_string()),
            bold_search_term: Some(false),
            ..Default::default()
        };
        let settings = Settings::merged(stored);

        assert_eq!(settings.language, "de");
        assert!(!settings.bold_search_term);
        assert_eq!(settings.template, DEFAULT_TEMPLATE);
        assert_eq!(settings.paragraph_template, DEFAULT_PARAGRAPH_TEMPLATE);
        assert!(settings.use_paragraph_template);
    }

    #[test]
    fn test_partial_yaml_uses_camel_case_keys() {
        let stored: StoredSettings =
            serde_yaml::from_str("useParagraphTemplate: false\nunknown: 3\n").unwrap();
        assert_eq!(stored.use_paragraph_template, Some(false));
        assert!(stored.template.is_none());
    }

    #[test]
    fn test_parse_update() {
        assert_eq!(
            SettingsUpdate::parse("bold_search_term", "off").unwrap(),
            SettingsUpdate::BoldSearchTerm(false)
        );
        assert_eq!(
            SettingsUpdate::parse("paragraphTemplate", r"> {{paragraphText}}\n").unwrap(),
            SettingsUpdate::ParagraphTemplate("> {{paragraphText}}\n".to_string())
        );
        assert!(SettingsUpdate::parse("use-paragraph-template", "maybe").is_err());
        assert!(SettingsUpdate::parse("colour", "red").is_err());
    }

    #[test]
    fn test_settings_env_overrides() {
        let mut settings = Settings::default();
        settings.merge_vars(vars(&[
            ("WIKI_EXCERPT_LANGUAGE", "nl-BE"),
            ("WIKI_EXCERPT_BOLD", "no"),
            ("WIKI_EXCERPT_USE_PARAGRAPH_TEMPLATE", "sometimes"),
        ]));

        assert_eq!(settings.language, "nl");
        assert!(!settings.bold_search_term);
        assert!(settings.use_paragraph_template);
        assert_eq!(settings.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_settings_without_overrides_unchanged() {
        let mut settings = Settings::default();
        settings.merge_vars(vars(&[]));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_outgoing_env_overrides() {
        let mut outgoing = OutgoingSettings::default();
        outgoing.merge_vars(vars(&[
            ("WIKI_EXCERPT_TIMEOUT", "120"),
            ("WIKI_EXCERPT_PROXY", "http://proxy.local:3128"),
            ("WIKI_EXCERPT_API_BASE", "http://127.0.0.1:8080"),
        ]));

        assert_eq!(outgoing.request_timeout, crate::MAX_TIMEOUT as f64);
        assert_eq!(outgoing.proxy.as_deref(), Some("http://proxy.local:3128"));
        assert_eq!(outgoing.api_base, "http://127.0.0.1:8080");

        let mut outgoing = OutgoingSettings::default();
        outgoing.merge_vars(vars(&[("WIKI_EXCERPT_TIMEOUT", "-4")]));
        assert_eq!(outgoing.request_timeout, crate::DEFAULT_TIMEOUT as f64);
    }

    #[test]
    fn test_apply_normalizes_language() {
        let mut settings = Settings::default();
        settings.apply(SettingsUpdate::Language("fr-CA".to_string()));
        assert_eq!(settings.language, "fr");
        settings.apply(SettingsUpdate::Language("  ".to_string()));
        assert_eq!(settings.language, "en");
    }
}
