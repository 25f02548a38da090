//! Signal extraction (input pre-classification).
//!
//! This module inspects normalized text and produces the fixed set of
//! lexical/stylistic signals the scorer consumes.
//!
//! ## Design notes
//!
//! - Every field of [`SignalSet`] is computed independently from the text;
//!   no signal reads another signal, so computation order is irrelevant.
//! - Lexicon matching is *substring* containment against a lowercased copy
//!   of the input. False positives inside longer words are acceptable (and
//!   historical): "secretary" counts as a "secret" hit.
//! - Extraction is total: any input, including the empty string, yields a
//!   fully populated `SignalSet` with 0/false defaults.

use serde::{Deserialize, Serialize};

use crate::Lexicons;

/// The fixed set of signals derived from one piece of normalized text.
///
/// Serializes as a flat mapping of signal names to values, which is the
/// `signals` field of the response schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Character count (Unicode scalar values) of the normalized text.
    pub length: usize,
    /// Uppercase letters divided by `max(length, 1)`; in [0,1].
    pub all_caps_ratio: f64,
    pub exclamation_count: usize,
    pub question_count: usize,
    /// Occurrences of `http://` or `https://`.
    pub url_count: usize,
    pub emotional_words: usize,
    pub sensational_words: usize,
    pub credible_words: usize,
    pub trusted_domain_count: usize,
    /// Bracketed numeric citation, parenthesized 4-digit year, "et al.", or
    /// "doi:" anywhere in the text.
    pub has_citations: bool,
    /// `sensational_words == 0 && emotional_words <= 1`.
    pub neutral_tone: bool,
}

/// Count how many distinct listed phrases occur as substrings of `lower`.
///
/// Each phrase contributes at most 1 regardless of how often it repeats.
fn lexicon_hits(lower: &str, phrases: &[&str]) -> usize {
    phrases.iter().filter(|phrase| lower.contains(*phrase)).count()
}

/// Scan `text` (assumed normalized) and derive a fully populated [`SignalSet`].
pub fn extract(text: &str, lexicons: &Lexicons) -> SignalSet {
    let lower = text.to_lowercase();

    let length = text.chars().count();
    let uppercase = text.chars().filter(|c| c.is_uppercase()).count();
    // max(length, 1) guards the empty-input division.
    let all_caps_ratio = uppercase as f64 / length.max(1) as f64;

    let sensational_words = lexicon_hits(&lower, lexicons.sensational);
    let emotional_words = lexicon_hits(&lower, lexicons.emotional);

    SignalSet {
        length,
        all_caps_ratio,
        exclamation_count: text.matches('!').count(),
        question_count: text.matches('?').count(),
        url_count: regex!(r"https?://").find_iter(text).count(),
        emotional_words,
        sensational_words,
        credible_words: lexicon_hits(&lower, lexicons.credible),
        trusted_domain_count: lexicon_hits(&lower, lexicons.trusted_sources),
        has_citations: regex!(r"\[\d+\]|\(\d{4}\)|et al\.|doi:").is_match(&lower),
        neutral_tone: sensational_words == 0 && emotional_words <= 1,
    }
}
