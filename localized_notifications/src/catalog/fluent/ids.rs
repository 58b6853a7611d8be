//! Dotted notification keys.
//!
//! Keys are often namespaced with dots (`user.not_found`), which Fluent
//! message identifiers cannot contain. Both sides are mapped to `-`: top-level
//! definitions when a resource is added, and keys when they are looked up.

use std::borrow::Cow;

/// Maps a notification key onto the identifier stored in the bundle.
pub(super) fn fluent_id(key: &str) -> Cow<'_, str> {
    if key.contains('.') {
        key.replace('.', "-").into()
    } else {
        key.into()
    }
}

/// Rewrites every top-level `dotted.key = ...` definition in `resource`.
pub(super) fn rewrite_dotted_ids(resource: &str) -> String {
    let mut rewritten = String::with_capacity(resource.len());
    for (index, line) in resource.lines().enumerate() {
        if index > 0 {
            rewritten.push('\n');
        }
        if let Some((id, rest)) = dotted_definition(line) {
            rewritten.push_str(&fluent_id(id));
            rewritten.push_str(rest);
        } else {
            rewritten.push_str(line);
        }
    }
    rewritten
}

/// Splits a line that defines a dotted message into its id and the remainder.
///
/// Comments, terms and indented continuation lines never match because their
/// first character cannot start a message id.
fn dotted_definition(line: &str) -> Option<(&str, &str)> {
    let id_len = line.find(|ch: char| !(ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.')))?;
    let (id, rest) = line.split_at_checked(id_len)?;
    let defines_message = id.chars().next().is_some_and(char::is_alphabetic)
        && id.contains('.')
        && rest.trim_start().starts_with('=');
    defines_message.then_some((id, rest))
}
