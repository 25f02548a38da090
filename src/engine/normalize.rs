//! Text normalization.
//!
//! The extractor assumes one canonical whitespace form: no leading/trailing
//! whitespace, and every internal run of whitespace (spaces, tabs, newlines)
//! collapsed to a single space. `normalize` is total over all string inputs
//! and idempotent, so callers may apply it defensively without harm.

/// Trim and collapse whitespace runs to single spaces.
///
/// `split_whitespace` already skips leading/trailing whitespace and treats
/// any run of Unicode whitespace as one separator, so rejoining with `" "`
/// is exactly the trim-and-collapse contract.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
