//! Result types produced by password evaluation.

use std::fmt;

/// Number of rules counted toward the strength score (the baseline tier).
pub const MAX_SCORE: u8 = 7;

/// Tier a rule belongs to.
///
/// Baseline rules are the basic length/character-class requirements; any
/// failure rejects immediately. Advanced rules are heuristics applied after
/// the whole baseline tier has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Baseline,
    Advanced,
}

/// Pass/fail outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Stable rule identifier (e.g. `"min_length"`).
    pub name: &'static str,
    /// Display text for a requirements checklist.
    pub label: &'static str,
    pub tier: Tier,
    pub passed: bool,
}

/// Full evaluation of a password against every rule.
///
/// Produced by [`evaluate_all`](crate::evaluate_all); recomputed on each call,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// One outcome per rule, in rule-definition order (baseline tier first).
    pub checks: Vec<RuleOutcome>,
    /// Final accept/reject decision over all eleven rules.
    pub accepted: bool,
    /// Count of passing baseline rules, `0..=MAX_SCORE`.
    ///
    /// Advanced heuristics influence `accepted` but not the score, so the
    /// strength meter tracks the seven checklist requirements.
    pub score: u8,
}

impl Evaluation {
    /// Strength band for this evaluation's score.
    pub fn band(&self) -> StrengthBand {
        StrengthBand::from_score(self.score)
    }
}

/// Qualitative strength label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthBand {
    Weak,
    Medium,
    Strong,
}

impl StrengthBand {
    /// Bands a score via the fixed thresholds: `0..=3` is weak, `4..=5` is
    /// medium, anything higher is strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => StrengthBand::Weak,
            4..=5 => StrengthBand::Medium,
            _ => StrengthBand::Strong,
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Medium => "Medium",
            StrengthBand::Strong => "Strong",
        };
        f.write_str(label)
    }
}
