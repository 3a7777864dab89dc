//! Ambiguity rule - rejects passwords dominated by easily confused glyphs.

const AMBIGUOUS_GROUPS: [[char; 3]; 2] = [['l', '1', 'I'], ['O', '0', 'o']];

/// Checks that neither confusable-glyph group makes up more than half the
/// password length (floor division).
///
/// Group membership is glyph-exact, no case folding; a few ambiguous
/// characters in an otherwise varied password are allowed.
pub fn no_ambiguous_dominance(password: &str) -> bool {
    let len = password.chars().count();
    AMBIGUOUS_GROUPS.iter().all(|group| {
        let count = password.chars().filter(|c| group.contains(c)).count();
        count <= len / 2
    })
}
