//! Signal-extraction and scoring engine.
//!
//! This module is the *public entry point* for the credibility engine. The
//! pipeline is deliberately boring: four total functions applied in sequence,
//! no shared mutable state, no failure modes.
//!
//! ```text
//! raw text ── normalize ──▶ normalized text        (normalize.rs)
//!                               │
//!                               v
//!                        extract(&Lexicons)        (signals.rs)
//!                               │
//!                               v
//!                           SignalSet
//!                               │
//!                               v
//!                       score / breakdown          (score.rs)
//!                               │
//!                               v
//!                     clamped score in [0,1]
//!                               │
//!                               v
//!                           classify               (verdict.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: whitespace collapsing + trimming; idempotent.
//! - `signals.rs`: derives the fixed `SignalSet` from normalized text via
//!   lexicon scans and a handful of static regexes.
//! - `score.rs`: table-driven tiered adjustments over the raw `SignalSet`,
//!   summed onto a fixed baseline and clamped to [0,1]. Exposes the
//!   pre-clamp sum through `ScoreBreakdown`.
//! - `verdict.rs`: maps a clamped score onto the three-way `Verdict`.
//!
//! Signals never read each other and adjustments never read other
//! adjustments, so every stage is order-independent within itself.
//!
//! ## Adding new signals
//!
//! - Add the field to `SignalSet` and populate it in `signals.rs` (defaulting
//!   to 0/false when nothing matches).
//! - Add a `(min, delta)` ladder in `score.rs` and wire it into
//!   `score_breakdown`. Keep ladders sorted by descending threshold; the
//!   first matching tier wins.

#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/score.rs"]
mod score;
#[path = "engine/signals.rs"]
mod signals;
#[path = "engine/verdict.rs"]
mod verdict;

pub use normalize::normalize;
pub use score::{Adjustment, ScoreBreakdown, score, score_breakdown};
pub use signals::{SignalSet, extract};
pub use verdict::{Verdict, classify};
