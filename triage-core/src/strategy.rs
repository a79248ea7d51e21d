//! Scoring strategies: fixed weight blends over the four sub-scores.

use crate::task::PriorityLabel;
use serde::{Deserialize, Serialize};

/// Weights over (urgency, importance, effort, dependency). Each
/// strategy's table sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependency: f64,
}

/// Named weighting scheme for combining sub-scores into one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    FastestWins,
    HighImpact,
    DeadlineDriven,
    #[default]
    SmartBalance,
}

impl Strategy {
    /// Parse a wire name. Anything unrecognized falls back to
    /// `SmartBalance`; the fallback is deliberate, not an error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fastest_wins" => Strategy::FastestWins,
            "high_impact" => Strategy::HighImpact,
            "deadline_driven" => Strategy::DeadlineDriven,
            _ => Strategy::SmartBalance,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FastestWins => "fastest_wins",
            Strategy::HighImpact => "high_impact",
            Strategy::DeadlineDriven => "deadline_driven",
            Strategy::SmartBalance => "smart_balance",
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            Strategy::FastestWins => Weights {
                urgency: 0.2,
                importance: 0.2,
                effort: 0.45,
                dependency: 0.15,
            },
            Strategy::HighImpact => Weights {
                urgency: 0.2,
                importance: 0.55,
                effort: 0.1,
                dependency: 0.15,
            },
            Strategy::DeadlineDriven => Weights {
                urgency: 0.55,
                importance: 0.2,
                effort: 0.1,
                dependency: 0.15,
            },
            Strategy::SmartBalance => Weights {
                urgency: 0.35,
                importance: 0.35,
                effort: 0.15,
                dependency: 0.15,
            },
        }
    }

    /// Short human description used in the combination rationale.
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::FastestWins => {
                "Prioritizes low-effort tasks (45% weight on effort) for quick wins"
            }
            Strategy::HighImpact => "Emphasizes importance (55% weight) over other factors",
            Strategy::DeadlineDriven => "Focuses on urgency and due dates (55% weight on urgency)",
            Strategy::SmartBalance => {
                "Balances all factors: urgency (35%), importance (35%), effort (15%), dependencies (15%)"
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Blend the four sub-scores with the strategy's weights.
///
/// No normalization: the urgency term can reach 2.0, so combined scores
/// may exceed 1.0.
pub fn combine_scores(
    strategy: Strategy,
    urgency: f64,
    importance: f64,
    effort: f64,
    dependency: f64,
) -> (f64, String) {
    let w = strategy.weights();
    let score = urgency * w.urgency
        + importance * w.importance
        + effort * w.effort
        + dependency * w.dependency;
    let explanation = format!(
        "• Strategy: {}\n• Final Score: {score:.2} (urgency: {urgency:.2}×{}, importance: {importance:.2}×{}, effort: {effort:.2}×{}, dependencies: {dependency:.2}×{})",
        strategy.description(),
        percent(w.urgency),
        percent(w.importance),
        percent(w.effort),
        percent(w.dependency),
    );
    (score, explanation)
}

fn percent(weight: f64) -> String {
    format!("{:.0}%", weight * 100.0)
}

/// High / Medium / Low from the combined score. Strategy-agnostic.
pub fn priority_label(score: f64) -> PriorityLabel {
    if score >= 1.0 {
        PriorityLabel::High
    } else if score >= 0.6 {
        PriorityLabel::Medium
    } else {
        PriorityLabel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for strategy in [
            Strategy::FastestWins,
            Strategy::HighImpact,
            Strategy::DeadlineDriven,
            Strategy::SmartBalance,
        ] {
            let w = strategy.weights();
            let total = w.urgency + w.importance + w.effort + w.dependency;
            assert!((total - 1.0).abs() < 1e-9, "{strategy}: {total}");
        }
    }

    #[test]
    fn test_unknown_names_fall_back_to_smart_balance() {
        assert_eq!(Strategy::from_name("high_impact"), Strategy::HighImpact);
        assert_eq!(Strategy::from_name("smart_balance"), Strategy::SmartBalance);
        assert_eq!(Strategy::from_name("yolo"), Strategy::SmartBalance);
        assert_eq!(Strategy::from_name(""), Strategy::SmartBalance);
        assert_eq!(Strategy::from_name("HIGH_IMPACT"), Strategy::SmartBalance);
    }

    #[test]
    fn test_name_round_trips() {
        for strategy in [
            Strategy::FastestWins,
            Strategy::HighImpact,
            Strategy::DeadlineDriven,
            Strategy::SmartBalance,
        ] {
            assert_eq!(Strategy::from_name(strategy.name()), strategy);
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Strategy::DeadlineDriven).unwrap();
        assert_eq!(json, "\"deadline_driven\"");
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Strategy::DeadlineDriven);
    }

    #[test]
    fn test_combine_is_weighted_sum() {
        let (score, explanation) =
            combine_scores(Strategy::SmartBalance, 1.5, 0.9, 0.5, 0.3);
        let expected = 1.5 * 0.35 + 0.9 * 0.35 + 0.5 * 0.15 + 0.3 * 0.15;
        assert!((score - expected).abs() < 1e-9);
        assert!(explanation.contains("• Strategy: Balances all factors"));
        assert!(explanation.contains("urgency: 1.50×35%"));
        assert!(explanation.contains("dependencies: 0.30×15%"));
    }

    #[test]
    fn test_score_can_exceed_one() {
        // Max urgency, max importance under deadline_driven.
        let (score, _) = combine_scores(Strategy::DeadlineDriven, 2.0, 1.0, 1.0, 1.0);
        assert!(score > 1.0);
    }

    #[test]
    fn test_priority_label_thresholds() {
        assert_eq!(priority_label(1.0), PriorityLabel::High);
        assert_eq!(priority_label(1.4), PriorityLabel::High);
        assert_eq!(priority_label(0.99), PriorityLabel::Medium);
        assert_eq!(priority_label(0.6), PriorityLabel::Medium);
        assert_eq!(priority_label(0.59), PriorityLabel::Low);
        assert_eq!(priority_label(0.0), PriorityLabel::Low);
    }
}
