//! Character-class rules - whitespace, case, digit and symbol requirements.

use super::SPECIAL_CHARS;

/// Checks that no character is whitespace (space, tab, newline or any other
/// Unicode whitespace).
pub fn no_whitespace(password: &str) -> bool {
    !password.chars().any(char::is_whitespace)
}

/// Checks that at least one character is an uppercase letter.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(char::is_uppercase)
}

/// Checks that at least one character is a lowercase letter.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(char::is_lowercase)
}

/// Checks that at least one character is a decimal digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks that at least one character belongs to the fixed special set.
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
