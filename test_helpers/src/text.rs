//! Normalising rendered notification text for comparisons.

/// Removes the Unicode bidi isolation marks Fluent places around
/// placeables when isolation is enabled.
#[must_use]
pub fn strip_isolates(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(*ch, '\u{2068}' | '\u{2069}'))
        .collect()
}
