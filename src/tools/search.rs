//! Type-ahead search handler.

use crate::format;
use crate::search::find_matches;
use crate::state::SearchState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Query text typed so far
    pub query: String,
    /// Maximum number of suggestions to show (default: configured display limit)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Rank the loaded index against the query and render the suggestions.
pub async fn handle_search(state: &SearchState, request: SearchRequest) -> Result<String, String> {
    let Some(index) = state.index().await else {
        return Err("No index loaded. Use load_index with the path to a dartdoc index.json first."
            .to_string());
    };

    let limit = request.limit.unwrap_or(state.config().display_limit);
    let matches = find_matches(&request.query, &index, &state.config().weights);

    Ok(format::suggestions(&request.query, &matches, limit))
}
