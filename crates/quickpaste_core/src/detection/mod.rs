//! Language tagging for paste content: heuristic detection and manual tags.

mod rules;

use crate::constants::{CLASSIFY_PREFIX_CHARS, NO_LANGUAGE};
use regex::Regex;
use std::sync::LazyLock;

pub use rules::{Rule, Sample, DETECTABLE_LANGUAGES, RULES};

/// Language hint meaning "detect it for me".
pub const AUTO_LANGUAGE: &str = "auto";

static MANUAL_TAG: LazyLock<Regex> =
    LazyLock::new(|| rules::compiled(r"(?i)^[a-z0-9.+-]+$"));

/// Classify text by the first matching rule in [`RULES`].
///
/// Only the first 1000 characters are inspected, so contents sharing that
/// prefix always receive the same tag.
///
/// # Returns
/// A tag from [`DETECTABLE_LANGUAGES`], or `"none"` when nothing matches.
pub fn classify(content: &str) -> String {
    let sample = rules::Sample::new(char_prefix(content, CLASSIFY_PREFIX_CHARS));
    RULES
        .iter()
        .find(|rule| (rule.matches)(&sample))
        .map(|rule| rule.language)
        .or_else(|| rules::fallback(&sample))
        .unwrap_or(NO_LANGUAGE)
        .to_string()
}

/// Validate a caller-supplied language tag.
///
/// # Returns
/// The tag lowercased when it only uses letters, digits, `.`, `+` and `-`;
/// otherwise `"none"`.
pub fn normalize_manual_language(language: &str) -> String {
    if MANUAL_TAG.is_match(language) {
        language.to_ascii_lowercase()
    } else {
        NO_LANGUAGE.to_string()
    }
}

/// Pick the stored language for a new paste.
///
/// A missing or empty hint, or exactly `auto`, runs [`classify`]; anything
/// else (including `AUTO`) goes through [`normalize_manual_language`] without
/// looking at the content.
pub fn resolve_language(hint: Option<&str>, content: &str) -> String {
    match hint {
        None | Some("") | Some(AUTO_LANGUAGE) => classify(content),
        Some(hint) => normalize_manual_language(hint),
    }
}

fn char_prefix(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((end, _)) => &content[..end],
        None => content,
    }
}
