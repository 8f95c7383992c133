//! Table operations, one module per resource.
//!
//! Each module contains `impl Database` blocks for its table.

mod documents;
mod events;
mod notes;

/// Case-insensitive substring match of `query` against any of `fields`.
pub(crate) fn matches_query(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    fields.iter().any(|field| field.to_lowercase().contains(&needle))
}
