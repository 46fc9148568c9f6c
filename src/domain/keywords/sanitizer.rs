//! Keyword sanitizer - normalises free-text keywords before detection.
//!
//! Keywords end up inside the brief handed to the image model, so anything
//! that looks like a link, an address or an instruction to the model is
//! removed before matching.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default cap on sanitized keyword length, in characters.
pub const DEFAULT_MAX_KEYWORD_CHARS: usize = 500;

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("URL pattern must compile"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.+-]+@[\w-]+(?:\.[\w-]+)+").expect("email pattern must compile")
});

static INJECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:ignore|disregard|forget)\s+(?:all\s+)?(?:the\s+)?(?:previous|prior|above)\s+instructions?\b|\b(?:system|assistant|user)\s*:",
    )
    .expect("injection pattern must compile")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

/// Strips links, e-mail addresses and prompt-injection phrases, collapses
/// whitespace and truncates to `max_chars` characters.
pub fn sanitize_keywords(raw: &str, max_chars: usize) -> String {
    let text = URL.replace_all(raw, " ");
    let text = EMAIL.replace_all(&text, " ");
    let text = INJECTION.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim().chars().take(max_chars).collect::<String>().trim_end().to_string()
}
