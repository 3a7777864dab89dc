//! Denylist rule - rejects known common passwords.

use crate::denylist::is_common;

/// Checks that the password is not a known common password.
pub fn not_common(password: &str) -> bool {
    !is_common(password)
}
