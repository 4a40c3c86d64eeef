//! Disambiguation page detection

use super::response::Extract;

/// Phrase that opens the candidate list of a disambiguation page
pub const DISAMBIGUATION_MARKER: &str = "may refer to:";

pub fn is_ambiguous(extract: &Extract) -> bool {
    extract.text.contains(DISAMBIGUATION_MARKER)
}

/// The first candidate topic listed on a disambiguation page.
///
/// Takes the text after the marker up to the first comma. A candidate that
/// runs into a section heading keeps only what follows the last `==`.
/// Returns `None` when there is no marker or the candidate is blank.
pub fn next_search_term(extract: &Extract) -> Option<String> {
    let (_, candidates) = extract.text.split_once(DISAMBIGUATION_MARKER)?;
    let first = candidates.trim().split(',').next().unwrap_or_default();
    let term = first.split("==").last().unwrap_or_default().trim();

    if term.is_empty() {
        None
    } else {
        Some(term.to_string())
    }
}
