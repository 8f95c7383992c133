mod document;
mod event;
mod note;

pub use document::*;
pub use event::*;
pub use note::*;

/// Storage format for last-edited timestamps (local wall-clock time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trimmed value of a request field, or `None` when missing or blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
