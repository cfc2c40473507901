//! Text canonicalization for comparison, display, and cell cleaning.

use regex::Regex;

/// Canonicalizes a string for equality tests only: trim, lowercase, then keep
/// nothing but `a-z`. Digits, punctuation, whitespace, and accented letters
/// are dropped entirely — not transliterated. Never use the output for
/// display.
#[must_use]
pub fn normalize_for_compare(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

/// Canonicalizes a string for display: trim, lowercase, then uppercase the
/// first letter of each whitespace-delimited word.
#[must_use]
pub fn normalize_for_display(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes bracketed numeric citation markers (`[12]`) and collapses
/// whitespace runs to a single space. Applied to every cell before
/// classification or storage.
#[must_use]
pub fn clean_text(text: &str) -> String {
    let citations = Regex::new(r"\[\d+\]").expect("valid citation regex");
    let without_citations = citations.replace_all(text, "");
    without_citations
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
