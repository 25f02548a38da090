//! Fixed keyword lexicons.
//!
//! The extractor counts case-insensitive substring hits against four phrase
//! lists. The lists are plain data, injected into the extractor as a
//! [`Lexicons`] value rather than baked into the scanning code, so a future
//! locale or tuning pass only has to supply a different `Lexicons` without
//! touching extraction or scoring logic.
//!
//! Matching is substring containment, not token-boundary-aware: a listed
//! phrase inside a longer word still counts ("secretary" hits "secret").
//! That mirrors the historical behavior and is preserved on purpose.

/// Sensationalist clickbait phrases. Any hit flips `neutral_tone` off.
const SENSATIONAL: &[&str] = &[
    "shocking",
    "unbelievable",
    "you won't believe",
    "miracle",
    "secret",
    "exposed",
    "they don't want you to know",
    "doctors hate",
    "one weird trick",
];

/// Hedged-attribution phrases typical of sourced reporting.
const CREDIBLE: &[&str] = &[
    "study shows",
    "research found",
    "according to",
    "data indicates",
    "evidence suggests",
    "scientists",
    "researchers",
    "peer-reviewed",
];

/// Names of wire services and outlets treated as trusted sources.
const TRUSTED_SOURCES: &[&str] = &[
    "reuters",
    "bbc",
    "ap news",
    "npr",
    "associated press",
    "bloomberg",
    "the guardian",
    "financial times",
    "nature",
    "science",
];

/// Emotionally charged adjectives; more than one suppresses `neutral_tone`.
const EMOTIONAL: &[&str] = &[
    "angry",
    "furious",
    "devastating",
    "heartbreaking",
    "amazing",
    "incredible",
    "outrageous",
    "terrifying",
];

/// The four phrase lists the extractor scans for.
///
/// `Lexicons::default()` is the canonical fixed set; construct your own to
/// tune or localize the lists.
#[derive(Debug, Clone, Copy)]
pub struct Lexicons {
    pub sensational: &'static [&'static str],
    pub credible: &'static [&'static str],
    pub trusted_sources: &'static [&'static str],
    pub emotional: &'static [&'static str],
}

impl Default for Lexicons {
    fn default() -> Self {
        Lexicons {
            sensational: SENSATIONAL,
            credible: CREDIBLE,
            trusted_sources: TRUSTED_SOURCES,
            emotional: EMOTIONAL,
        }
    }
}
