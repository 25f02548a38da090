//! Heuristic scoring.
//!
//! The scorer folds a [`SignalSet`] into a single credibility score:
//!
//! ```text
//! SignalSet ──▶ per-signal tiered delta ──▶ baseline + Σ deltas ──▶ clamp [0,1]
//! ```
//!
//! Each signal owns one ladder of `(min, delta)` tiers, sorted by descending
//! threshold. Evaluation walks the ladder top-down and takes the first tier
//! the signal value reaches; signals below every tier contribute nothing.
//! Deltas only ever read the raw `SignalSet`, never another delta, so the
//! final sum is order-independent.
//!
//! The one deliberate exception is `trusted_domain_count`: its ladder is
//! *stacked*, every reached tier contributes, so the ≥3 bonus lands on top
//! of the ≥1 bonus instead of replacing it.
//!
//! Intermediate sums may leave [0,1]; [`ScoreBreakdown::raw`] exposes the
//! pre-clamp value, [`ScoreBreakdown::score`] the clamped one.

use super::signals::SignalSet;

/// Neutral starting point before any adjustment is applied.
const BASELINE: f64 = 0.6;

/// One tier of a count ladder: fires when `value >= min`.
struct CountTier {
    min: usize,
    delta: f64,
}

/// One tier of a ratio ladder: fires when `value > min`.
struct RatioTier {
    min: f64,
    delta: f64,
}

const ALL_CAPS_TIERS: &[RatioTier] = &[
    RatioTier { min: 0.50, delta: -0.25 },
    RatioTier { min: 0.30, delta: -0.20 },
    RatioTier { min: 0.15, delta: -0.10 },
];

const EXCLAMATION_TIERS: &[CountTier] = &[
    CountTier { min: 11, delta: -0.25 },
    CountTier { min: 6, delta: -0.20 },
    CountTier { min: 3, delta: -0.10 },
];

const EMOTIONAL_TIERS: &[CountTier] = &[
    CountTier { min: 6, delta: -0.20 },
    CountTier { min: 4, delta: -0.15 },
    CountTier { min: 2, delta: -0.05 },
];

const SENSATIONAL_TIERS: &[CountTier] = &[
    CountTier { min: 3, delta: -0.30 },
    CountTier { min: 2, delta: -0.20 },
    CountTier { min: 1, delta: -0.10 },
];

const URL_TIERS: &[CountTier] = &[
    CountTier { min: 6, delta: -0.10 },
    CountTier { min: 4, delta: -0.05 },
];

/// Length is one ladder spanning reward and penalty: long text is rewarded,
/// short text penalized, with a neutral band in between (0.0 delta, which
/// fires no adjustment entry).
const LENGTH_TIERS: &[CountTier] = &[
    CountTier { min: 800, delta: 0.10 },
    CountTier { min: 400, delta: 0.05 },
    CountTier { min: 200, delta: 0.0 },
    CountTier { min: 120, delta: -0.05 },
    CountTier { min: 80, delta: -0.10 },
    CountTier { min: 0, delta: -0.15 },
];

const CREDIBLE_TIERS: &[CountTier] = &[
    CountTier { min: 3, delta: 0.20 },
    CountTier { min: 2, delta: 0.15 },
    CountTier { min: 1, delta: 0.10 },
];

/// Stacked: both tiers can fire for the same input (see module docs).
const TRUSTED_TIERS: &[CountTier] = &[
    CountTier { min: 3, delta: 0.15 },
    CountTier { min: 1, delta: 0.25 },
];

const CITATIONS_BONUS: f64 = 0.10;
const NEUTRAL_TONE_BONUS: f64 = 0.10;

/// A single tiered delta that fired for one signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// Name of the signal the delta came from.
    pub signal: &'static str,
    pub delta: f64,
}

/// Full account of one scoring run: baseline, every fired adjustment, the
/// pre-clamp sum and the clamped score.
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub baseline: f64,
    pub adjustments: Vec<Adjustment>,
    /// `baseline` plus all deltas, before clamping. May leave [0,1].
    pub raw: f64,
    /// `raw` clamped to [0,1].
    pub score: f64,
}

fn count_tier(value: usize, tiers: &[CountTier]) -> Option<f64> {
    tiers.iter().find(|tier| value >= tier.min).map(|tier| tier.delta)
}

fn ratio_tier(value: f64, tiers: &[RatioTier]) -> Option<f64> {
    tiers.iter().find(|tier| value > tier.min).map(|tier| tier.delta)
}

/// Sum of every reached tier, for stacked ladders.
fn stacked_tiers(value: usize, tiers: &[CountTier]) -> Option<f64> {
    let sum: f64 = tiers.iter().filter(|tier| value >= tier.min).map(|tier| tier.delta).sum();
    (sum != 0.0).then_some(sum)
}

/// Score `signals` and keep the full per-adjustment account.
pub fn score_breakdown(signals: &SignalSet) -> ScoreBreakdown {
    let mut adjustments = Vec::new();
    let mut push = |signal: &'static str, delta: Option<f64>| {
        match delta {
            Some(delta) if delta != 0.0 => adjustments.push(Adjustment { signal, delta }),
            _ => {}
        }
    };

    push("all_caps_ratio", ratio_tier(signals.all_caps_ratio, ALL_CAPS_TIERS));
    push("exclamation_count", count_tier(signals.exclamation_count, EXCLAMATION_TIERS));
    push("emotional_words", count_tier(signals.emotional_words, EMOTIONAL_TIERS));
    push("sensational_words", count_tier(signals.sensational_words, SENSATIONAL_TIERS));
    push("url_count", count_tier(signals.url_count, URL_TIERS));
    push("length", count_tier(signals.length, LENGTH_TIERS));
    push("credible_words", count_tier(signals.credible_words, CREDIBLE_TIERS));
    push("trusted_domain_count", stacked_tiers(signals.trusted_domain_count, TRUSTED_TIERS));
    push("has_citations", signals.has_citations.then_some(CITATIONS_BONUS));
    push("neutral_tone", signals.neutral_tone.then_some(NEUTRAL_TONE_BONUS));

    let raw = BASELINE + adjustments.iter().map(|a| a.delta).sum::<f64>();

    ScoreBreakdown { baseline: BASELINE, adjustments, raw, score: raw.clamp(0.0, 1.0) }
}

/// Score `signals`, clamped to [0,1].
pub fn score(signals: &SignalSet) -> f64 {
    score_breakdown(signals).score
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Signals that fire no tier at all: mid-range length, nothing else.
    ///
    /// `neutral_tone` is deliberately false here so the baseline is exactly
    /// what comes out; the scorer does not re-derive it from the counts.
    fn quiet_signals() -> SignalSet {
        SignalSet {
            length: 250,
            all_caps_ratio: 0.0,
            exclamation_count: 0,
            question_count: 0,
            url_count: 0,
            emotional_words: 0,
            sensational_words: 0,
            credible_words: 0,
            trusted_domain_count: 0,
            has_citations: false,
            neutral_tone: false,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn quiet_signals_score_the_baseline() {
        let breakdown = score_breakdown(&quiet_signals());

        assert!(breakdown.adjustments.is_empty());
        assert_close(breakdown.raw, 0.6);
        assert_close(breakdown.score, 0.6);
    }

    #[test]
    fn exclamation_ladder_picks_first_matching_tier() {
        // Array of (count, expected delta); 0.0 means no tier fires.
        let cases: Vec<(usize, f64)> = vec![(0, 0.0), (2, 0.0), (3, -0.10), (5, -0.10), (6, -0.20), (10, -0.20), (11, -0.25), (40, -0.25)];

        for (count, delta) in cases {
            let mut signals = quiet_signals();
            signals.exclamation_count = count;
            assert_close(score(&signals), 0.6 + delta);
        }
    }

    #[test]
    fn all_caps_ladder_uses_strict_thresholds() {
        let cases: Vec<(f64, f64)> = vec![(0.0, 0.0), (0.15, 0.0), (0.16, -0.10), (0.30, -0.10), (0.31, -0.20), (0.50, -0.20), (0.51, -0.25), (1.0, -0.25)];

        for (ratio, delta) in cases {
            let mut signals = quiet_signals();
            signals.all_caps_ratio = ratio;
            assert_close(score(&signals), 0.6 + delta);
        }
    }

    #[test]
    fn length_ladder_spans_penalty_and_reward() {
        let cases: Vec<(usize, f64)> = vec![
            (0, -0.15),
            (79, -0.15),
            (80, -0.10),
            (119, -0.10),
            (120, -0.05),
            (199, -0.05),
            (200, 0.0),
            (399, 0.0),
            (400, 0.05),
            (800, 0.10),
            (5000, 0.10),
        ];

        for (length, delta) in cases {
            let mut signals = quiet_signals();
            signals.length = length;
            assert_close(score(&signals), 0.6 + delta);
        }
    }

    #[test]
    fn neutral_length_band_fires_no_adjustment() {
        let breakdown = score_breakdown(&quiet_signals());
        assert!(breakdown.adjustments.iter().all(|a| a.signal != "length"));
    }

    #[test]
    fn trusted_domain_bonus_stacks_at_three() {
        let mut signals = quiet_signals();

        signals.trusted_domain_count = 1;
        assert_close(score(&signals), 0.6 + 0.25);

        signals.trusted_domain_count = 2;
        assert_close(score(&signals), 0.6 + 0.25);

        // The >=3 tier is additive on top of the >=1 tier, not a replacement.
        signals.trusted_domain_count = 3;
        assert_close(score(&signals), 0.6 + 0.25 + 0.15);
    }

    #[test]
    fn trusted_domain_bonus_never_decreases_score() {
        for template in [quiet_signals(), {
            let mut s = quiet_signals();
            s.sensational_words = 3;
            s.exclamation_count = 12;
            s.length = 10;
            s
        }] {
            let mut with_none = template.clone();
            with_none.trusted_domain_count = 0;
            let mut with_one = template.clone();
            with_one.trusted_domain_count = 1;

            assert!(score(&with_one) >= score(&with_none));
        }
    }

    #[test]
    fn boolean_bonuses_are_flat() {
        let mut signals = quiet_signals();
        signals.has_citations = true;
        assert_close(score(&signals), 0.6 + 0.10);

        signals.neutral_tone = true;
        assert_close(score(&signals), 0.6 + 0.10 + 0.10);
    }

    #[test]
    fn raw_sum_below_zero_is_observable_then_clamped() {
        let mut signals = quiet_signals();
        signals.all_caps_ratio = 0.6;
        signals.exclamation_count = 12;
        signals.sensational_words = 3;
        signals.emotional_words = 6;
        signals.length = 10;

        let breakdown = score_breakdown(&signals);
        // 0.6 - 0.25 - 0.25 - 0.30 - 0.20 - 0.15 = -0.55
        assert_close(breakdown.raw, -0.55);
        assert_close(breakdown.score, 0.0);
    }

    #[test]
    fn raw_sum_above_one_is_observable_then_clamped() {
        let mut signals = quiet_signals();
        signals.length = 900;
        signals.credible_words = 3;
        signals.trusted_domain_count = 3;
        signals.has_citations = true;
        signals.neutral_tone = true;

        let breakdown = score_breakdown(&signals);
        // 0.6 + 0.10 + 0.20 + 0.25 + 0.15 + 0.10 + 0.10 = 1.50
        assert_close(breakdown.raw, 1.50);
        assert_close(breakdown.score, 1.0);
    }
}
