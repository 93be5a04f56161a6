//! Scoring and verdicts.
//!
//! A score is the sum of the weights of passing checks, floored to an
//! integer in `0..=100`. With the default equal weights (12.5 each) that is
//! the floored percentage of checks passed: 8/8 -> 100, 7/8 -> 87,
//! 6/8 -> 75, 5/8 -> 62, 4/8 -> 50.

use std::fmt;

use serde::Serialize;

use crate::checks::CheckOutcome;
use crate::config::{ScoringConfig, VerdictThresholds};

/// Absorbs float drift so weights summing to 100 score exactly 100.
const SCORE_EPSILON: f64 = 1e-6;

/// Aggregated audit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    /// Points, 0-100.
    pub value: u8,
    /// Number of checks that passed.
    pub passed: usize,
    /// Number of checks evaluated.
    pub total: usize,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.value)
    }
}

/// Launch verdict tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    #[serde(rename = "ready")]
    Ready,
    #[serde(rename = "almost ready")]
    AlmostReady,
    #[serde(rename = "not ready")]
    NotReady,
}

impl Verdict {
    /// Lower-case tier label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::AlmostReady => "almost ready",
            Self::NotReady => "not ready",
        }
    }

    /// One-line banner shown under the score.
    pub fn headline(self) -> &'static str {
        match self {
            Self::Ready => "LAUNCH READY: go live with confidence",
            Self::AlmostReady => "ALMOST READY: fix a few things first",
            Self::NotReady => "NOT READY: critical issues need fixing",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score a set of outcomes.
pub fn score(outcomes: &[CheckOutcome], config: &ScoringConfig) -> Score {
    let points: f64 = outcomes
        .iter()
        .filter(|o| o.passed)
        .map(|o| config.weights.get(o.id))
        .sum();

    let value = (points + SCORE_EPSILON).floor().clamp(0.0, 100.0) as u8;

    Score {
        value,
        passed: outcomes.iter().filter(|o| o.passed).count(),
        total: outcomes.len(),
    }
}

/// Map a score onto a verdict tier.
pub fn verdict(score: u8, thresholds: &VerdictThresholds) -> Verdict {
    if score >= thresholds.ready {
        Verdict::Ready
    } else if score >= thresholds.almost_ready {
        Verdict::AlmostReady
    } else {
        Verdict::NotReady
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckId;
    use crate::config::CheckWeights;

    fn outcomes(passing: usize) -> Vec<CheckOutcome> {
        CheckId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                if i < passing {
                    CheckOutcome::pass(*id)
                } else {
                    CheckOutcome::fail(*id, "fix")
                }
            })
            .collect()
    }

    #[test]
    fn equal_weights_floor_percentages() {
        let config = ScoringConfig::default();
        let expected = [0, 12, 25, 37, 50, 62, 75, 87, 100];
        for (passing, want) in expected.iter().enumerate() {
            let s = score(&outcomes(passing), &config);
            assert_eq!(s.value, *want, "{} passing", passing);
            assert_eq!(s.passed, passing);
            assert_eq!(s.total, 8);
        }
    }

    #[test]
    fn all_pass_is_100_and_none_is_0() {
        let config = ScoringConfig::default();
        assert_eq!(score(&outcomes(8), &config).value, 100);
        assert_eq!(score(&outcomes(0), &config).value, 0);
    }

    #[test]
    fn every_combination_sums_passing_weights() {
        let config = ScoringConfig::default();
        for mask in 0u32..256 {
            let outcomes: Vec<_> = CheckId::ALL
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    if mask & (1 << i) != 0 {
                        CheckOutcome::pass(*id)
                    } else {
                        CheckOutcome::fail(*id, "fix")
                    }
                })
                .collect();
            let s = score(&outcomes, &config);
            let expected = (mask.count_ones() as f64 * 12.5).floor() as u8;
            assert_eq!(s.value, expected);
            assert!(s.value <= 100);
            assert_eq!(s.value == 100, mask == 255);
            assert_eq!(s.value == 0, mask == 0);
        }
    }

    #[test]
    fn custom_weights_apply() {
        let config = ScoringConfig {
            weights: CheckWeights {
                ssl: 30.0,
                page_speed: 10.0,
                robots_txt: 5.0,
                sitemap: 5.0,
                open_graph: 20.0,
                meta_description: 15.0,
                mobile_viewport: 10.0,
                favicon: 5.0,
            },
            ..Default::default()
        };
        // ssl + page_speed pass
        assert_eq!(score(&outcomes(2), &config).value, 40);
        assert_eq!(score(&outcomes(8), &config).value, 100);
    }

    #[test]
    fn drifting_weights_still_reach_100() {
        let third = 100.0 / 3.0;
        let config = ScoringConfig {
            weights: CheckWeights {
                ssl: third,
                page_speed: third,
                robots_txt: third,
                sitemap: 0.0,
                open_graph: 0.0,
                meta_description: 0.0,
                mobile_viewport: 0.0,
                favicon: 0.0,
            },
            ..Default::default()
        };
        assert_eq!(score(&outcomes(8), &config).value, 100);
    }

    #[test]
    fn verdict_thresholds_are_contiguous() {
        let thresholds = VerdictThresholds::default();
        for s in 0..=100u8 {
            let v = verdict(s, &thresholds);
            let expected = match s {
                80..=100 => Verdict::Ready,
                55..=79 => Verdict::AlmostReady,
                _ => Verdict::NotReady,
            };
            assert_eq!(v, expected, "score {}", s);
        }
    }

    #[test]
    fn verdict_boundaries() {
        let thresholds = VerdictThresholds::default();
        assert_eq!(verdict(80, &thresholds), Verdict::Ready);
        assert_eq!(verdict(79, &thresholds), Verdict::AlmostReady);
        assert_eq!(verdict(55, &thresholds), Verdict::AlmostReady);
        assert_eq!(verdict(54, &thresholds), Verdict::NotReady);
    }

    #[test]
    fn verdict_labels_and_serialization() {
        assert_eq!(Verdict::AlmostReady.to_string(), "almost ready");
        assert_eq!(
            serde_json::to_value(Verdict::NotReady).unwrap(),
            "not ready"
        );
        assert!(Verdict::Ready.headline().starts_with("LAUNCH READY"));
    }

    #[test]
    fn score_display() {
        let s = score(&outcomes(6), &ScoringConfig::default());
        assert_eq!(s.to_string(), "75/100");
    }
}
