//! Keyboard-pattern rule - rejects obvious key sequences.

const PATTERNS: [&str; 5] = ["qwerty", "asdfgh", "zxcvbn", "12345", "password"];

/// Checks that the lowercased password contains none of the known keyboard
/// rows or number-run sequences as a substring.
pub fn no_keyboard_pattern(password: &str) -> bool {
    let lowered = password.to_lowercase();
    !PATTERNS.iter().any(|pat| lowered.contains(pat))
}
