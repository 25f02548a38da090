//! Verdict classification.
//!
//! Maps a clamped credibility score onto one of three categories. Pure and
//! total; both tier boundaries are inclusive on their lower edge.

use serde::{Deserialize, Serialize};

/// Three-way categorical verdict over a credibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    LikelyReal,
    Uncertain,
    LikelyFake,
}

impl Verdict {
    /// Wire/CLI name of the verdict, identical to its serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::LikelyReal => "likely_real",
            Verdict::Uncertain => "uncertain",
            Verdict::LikelyFake => "likely_fake",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a score: >= 0.7 real, >= 0.5 uncertain, below that fake.
pub fn classify(score: f64) -> Verdict {
    if score >= 0.7 {
        Verdict::LikelyReal
    } else if score >= 0.5 {
        Verdict::Uncertain
    } else {
        Verdict::LikelyFake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_inclusive_on_the_lower_edge() {
        // Array of (score, expected verdict)
        let cases: Vec<(f64, Verdict)> = vec![
            (1.0, Verdict::LikelyReal),
            (0.7, Verdict::LikelyReal),
            (0.699999, Verdict::Uncertain),
            (0.5, Verdict::Uncertain),
            (0.499999, Verdict::LikelyFake),
            (0.0, Verdict::LikelyFake),
        ];

        for (score, expected) in cases {
            assert_eq!(classify(score), expected, "score: {score}");
        }
    }

    #[test]
    fn wire_names() {
        assert_eq!(Verdict::LikelyReal.to_string(), "likely_real");
        assert_eq!(Verdict::Uncertain.to_string(), "uncertain");
        assert_eq!(Verdict::LikelyFake.to_string(), "likely_fake");
    }
}
