use crate::engine;
use crate::lexicon::Lexicons;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

pub use crate::engine::{Adjustment, ScoreBreakdown, SignalSet, Verdict};

/// Result from [`analyze`] and [`analyze_with`].
///
/// This is the response schema an external request handler can serialize
/// verbatim: a flat `signals` mapping, the clamped score, and the verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Credibility score in [0,1].
    pub credibility_score: f64,
    /// The full extracted signal set.
    pub signals: SignalSet,
    /// Categorical verdict derived from the score.
    pub verdict: Verdict,
}

/// Additional details returned by [`analyze_verbose`] and
/// [`analyze_verbose_with`].
///
/// This is intentionally compact: it's meant for debugging and tuning
/// without dumping internal state the plain path never allocates.
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    /// The normalized text the signals were extracted from.
    pub normalized: String,
    /// Baseline, every fired adjustment, and the pre-clamp sum.
    pub breakdown: ScoreBreakdown,
    /// Total elapsed time spent normalizing + extracting + scoring.
    pub elapsed: Duration,
}

/// Result from [`analyze_verbose`] and [`analyze_verbose_with`].
#[derive(Debug, Clone)]
pub struct AnalysisVerbose {
    pub analysis: Analysis,
    pub details: AnalysisDetails,
}

/// Analyze `text` using the default lexicons.
///
/// # Example
/// ```
/// use credence::analyze;
///
/// let out = analyze("SHOCKING!!!");
/// assert_eq!(out.verdict.to_string(), "likely_fake");
/// ```
pub fn analyze(text: &str) -> Analysis {
    analyze_with(text, &Lexicons::default())
}

/// Analyze `text` against the provided `lexicons`.
///
/// Use this when tuning or localizing the phrase lists; the engine itself is
/// unchanged. Total over all string inputs, including the empty string.
pub fn analyze_with(text: &str, lexicons: &Lexicons) -> Analysis {
    let normalized = engine::normalize(text);
    let signals = engine::extract(&normalized, lexicons);
    let score = engine::score(&signals);

    Analysis { credibility_score: score, signals, verdict: engine::classify(score) }
}

pub fn analyze_verbose(text: &str) -> AnalysisVerbose {
    analyze_verbose_with(text, &Lexicons::default())
}

/// Analyze `text` and keep the full scoring account.
///
/// The breakdown carries every adjustment that fired and the pre-clamp sum,
/// which is the place to look when a score lands somewhere unexpected.
pub fn analyze_verbose_with(text: &str, lexicons: &Lexicons) -> AnalysisVerbose {
    let started = Instant::now();

    let normalized = engine::normalize(text);
    let signals = engine::extract(&normalized, lexicons);
    let breakdown = engine::score_breakdown(&signals);
    let score = breakdown.score;

    let elapsed = started.elapsed();

    AnalysisVerbose {
        analysis: Analysis { credibility_score: score, signals, verdict: engine::classify(score) },
        details: AnalysisDetails { normalized, breakdown, elapsed },
    }
}
