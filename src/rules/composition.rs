//! Composition rule - requires a human-like mix of character classes.

use super::SPECIAL_CHARS;

/// Checks that the password mixes at least one letter, one decimal digit and
/// one symbol from the fixed special set.
///
/// The classes overlap the baseline requirements, but they are re-checked
/// here so the rule stands on its own in a full evaluation.
pub fn human_like(password: &str) -> bool {
    let has_letter = password.chars().any(char::is_alphabetic);
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| SPECIAL_CHARS.contains(c));
    has_letter && has_digit && has_symbol
}
