//! Rendering of ranked entities as type-ahead suggestions.

use crate::entity::Entity;
use std::fmt::Write as _;

/// One suggestion line: the name, its kind in lower case, and the enclosing
/// entity when there is one.
///
/// ```text
/// add method from List
/// ```
pub fn suggestion(entity: &Entity) -> String {
    let mut line = format!("{} {}", entity.name, entity.kind.as_str().to_lowercase());
    if let Some(parent) = entity.parent_name() {
        let _ = write!(line, " from {}", parent);
    }
    line
}

/// Numbered suggestion list with navigation targets, at most `limit` entries.
pub fn suggestions(query: &str, entities: &[&Entity], limit: usize) -> String {
    if entities.is_empty() {
        return no_results(query);
    }

    let shown = entities.len().min(limit);
    let mut output = format!("Suggestions for '{}' ({} of {}):\n\n", query, shown, entities.len());

    for (idx, entity) in entities.iter().take(limit).enumerate() {
        let _ = writeln!(output, "{}. {}", idx + 1, suggestion(entity));
        if !entity.href.is_empty() {
            let _ = writeln!(output, "   {}", entity.href);
        }
    }

    output
}

pub fn no_results(query: &str) -> String {
    format!("No results found for '{}'.", query)
}
