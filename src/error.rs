//! Error handling types and utilities.

use thiserror::Error;

/// A specialized Result type for dartdoc-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when an index payload cannot be turned into entities.
///
/// Fatal to the load that produced it: no partial index is ever installed.
#[derive(Debug, Error)]
pub enum MalformedIndexError {
    /// The payload is not valid JSON at all.
    #[error("index payload is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),
    /// The payload parsed, but the top level is not an array.
    #[error("index payload must be an array of entity records, found {found}")]
    NotASequence { found: &'static str },
    /// A record could not be read as an entity (usually a missing `name`).
    #[error("entity record {position} is malformed: {source}")]
    Record {
        position: usize,
        #[source]
        source: serde_json::Error,
    },
    /// A record carries a `name`, but it is empty.
    #[error("entity record {position} has an empty name")]
    EmptyName { position: usize },
}
