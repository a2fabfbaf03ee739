//! Handler for (re)loading the search index.

use crate::config::expand_tilde;
use crate::state::SearchState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LoadIndexRequest {
    /// Path to a dartdoc `index.json` file
    pub path: String,
}

/// Load an index file, replacing the current one only if it parses.
pub async fn handle_load_index(
    state: &SearchState,
    request: LoadIndexRequest,
) -> Result<String, String> {
    let path = PathBuf::from(expand_tilde(&request.path).as_ref());
    let previous = state.store().source().await;

    let index = state
        .load_index(&path)
        .await
        .map_err(|e| format!("Failed to load index: {:#}", e))?;

    let mut response = format!(
        "Loaded {} entities from {}",
        index.len(),
        path.display()
    );
    if let Some(previous) = previous.filter(|previous| *previous != path) {
        let _ = write!(response, " (replaced {})", previous.display());
    }
    Ok(response)
}
