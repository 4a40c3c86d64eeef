//! Extract formatting
//!
//! Turns an [`Extract`] into the text handed to the sink: the lead section,
//! optionally rendered paragraph by paragraph, with the search term
//! emphasized, substituted into the main template.
//!
//! Placeholders are replaced once each, first occurrence only, in the order
//! `{{text}}`, `{{searchTerm}}`, `{{url}}`.

use crate::config::Settings;
use crate::wikipedia::Extract;
use regex::{NoExpand, RegexBuilder};

pub const TEXT_PLACEHOLDER: &str = "{{text}}";
pub const SEARCH_TERM_PLACEHOLDER: &str = "{{searchTerm}}";
pub const URL_PLACEHOLDER: &str = "{{url}}";
pub const PARAGRAPH_PLACEHOLDER: &str = "{{paragraphText}}";

const SECTION_DELIMITER: &str = "==";

/// Text before the first section heading, trimmed
pub fn lead_section(text: &str) -> &str {
    text.split(SECTION_DELIMITER).next().unwrap_or_default().trim()
}

/// The formatted lead section, without the surrounding template
pub fn format_body(extract: &Extract, search_term: &str, settings: &Settings) -> String {
    let lead = lead_section(&extract.text);
    if lead.is_empty() {
        return String::new();
    }

    let body = if settings.use_paragraph_template {
        render_paragraphs(lead, &settings.paragraph_template)
    } else {
        lead.to_string()
    };

    if settings.bold_search_term {
        bold_first_match(&body, search_term)
    } else {
        body
    }
}

/// The full text to insert
pub fn format_insert(extract: &Extract, search_term: &str, settings: &Settings) -> String {
    let body = format_body(extract, search_term, settings);
    settings
        .template
        .replacen(TEXT_PLACEHOLDER, &body, 1)
        .replacen(SEARCH_TERM_PLACEHOLDER, search_term, 1)
        .replacen(URL_PLACEHOLDER, &extract.url, 1)
}

fn render_paragraphs(lead: &str, paragraph_template: &str) -> String {
    lead.split('\n')
        .map(|paragraph| paragraph_template.replacen(PARAGRAPH_PLACEHOLDER, paragraph, 1))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Wrap the first case-insensitive occurrence of `term` in `**`, using the
/// caller's casing
fn bold_first_match(body: &str, term: &str) -> String {
    if term.is_empty() {
        return body.to_string();
    }

    let pattern = match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(_) => return body.to_string(),
    };

    let emphasized = format!("**{}**", term);
    pattern.replacen(body, 1, NoExpand(&emphasized)).into_owned()
}
