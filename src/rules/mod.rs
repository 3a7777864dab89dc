//! Password validation rules
//!
//! Each rule checks one requirement of the composite policy. Baseline rules
//! cover length and basic character classes; advanced rules are heuristics
//! against repetitive, pattern-like or hard-to-read passwords.

mod ambiguity;
mod charset;
mod composition;
mod denylist;
mod keyboard;
mod length;
mod repetition;

pub use ambiguity::no_ambiguous_dominance;
pub use charset::{has_digit, has_lowercase, has_special, has_uppercase, no_whitespace};
pub use composition::human_like;
pub use denylist::not_common;
pub use keyboard::no_keyboard_pattern;
pub use length::min_length;
pub use repetition::no_repetition;

use crate::types::Tier;

/// Special characters accepted by the `special` and `human_like` rules.
///
/// Membership is tested against this exact set, not a Unicode category.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single named validation rule.
///
/// `true` from the predicate means the password satisfies the rule.
pub struct Rule {
    /// Stable rule identifier.
    pub name: &'static str,
    /// Display text for a requirements checklist.
    pub label: &'static str,
    pub tier: Tier,
    predicate: fn(&str) -> bool,
}

impl Rule {
    /// Runs the rule's predicate against a password.
    pub fn check(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

/// All rules in decision order: the baseline tier first, then the advanced
/// heuristics. Fixed at build time.
pub const RULES: [Rule; 11] = [
    Rule {
        name: "not_common",
        label: "Not a common password",
        tier: Tier::Baseline,
        predicate: not_common,
    },
    Rule {
        name: "min_length",
        label: "At least 8 characters",
        tier: Tier::Baseline,
        predicate: min_length,
    },
    Rule {
        name: "no_whitespace",
        label: "No whitespace",
        tier: Tier::Baseline,
        predicate: no_whitespace,
    },
    Rule {
        name: "uppercase",
        label: "Contains uppercase letter",
        tier: Tier::Baseline,
        predicate: has_uppercase,
    },
    Rule {
        name: "lowercase",
        label: "Contains lowercase letter",
        tier: Tier::Baseline,
        predicate: has_lowercase,
    },
    Rule {
        name: "digit",
        label: "Contains digit",
        tier: Tier::Baseline,
        predicate: has_digit,
    },
    Rule {
        name: "special",
        label: "Contains special character (!@#$%^&* etc.)",
        tier: Tier::Baseline,
        predicate: has_special,
    },
    Rule {
        name: "no_repetition",
        label: "No excessive repetition",
        tier: Tier::Advanced,
        predicate: no_repetition,
    },
    Rule {
        name: "no_keyboard_pattern",
        label: "No keyboard pattern",
        tier: Tier::Advanced,
        predicate: no_keyboard_pattern,
    },
    Rule {
        name: "no_ambiguous_dominance",
        label: "No dominant ambiguous characters",
        tier: Tier::Advanced,
        predicate: no_ambiguous_dominance,
    },
    Rule {
        name: "human_like",
        label: "Mixes letters, digits and symbols",
        tier: Tier::Advanced,
        predicate: human_like,
    },
];
