//! Resolving a chosen suggestion to its navigation target.

use crate::state::SearchState;
use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SelectRequest {
    /// Exact name of the chosen entity
    pub name: String,
    /// Name of the enclosing entity, to pick between same-named members
    #[serde(default)]
    pub enclosed_by: Option<String>,
}

/// Return the `href` of the selected entity.
pub async fn handle_select(state: &SearchState, request: SelectRequest) -> Result<String, String> {
    let Some(index) = state.index().await else {
        return Err("No index loaded. Use load_index first.".to_string());
    };

    let entity = index
        .select(&request.name, request.enclosed_by.as_deref())
        .ok_or_else(|| match &request.enclosed_by {
            Some(parent) => format!("No entity named '{}' inside '{}'", request.name, parent),
            None => format!("No entity named '{}'", request.name),
        })?;

    tracing::debug!("Selected '{}' -> {}", entity.name, entity.href);
    Ok(entity.href.clone())
}
