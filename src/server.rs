//! MCP server exposing the search session as tools.

use crate::state::SearchState;
use crate::tools::load_index::{LoadIndexRequest, handle_load_index};
use crate::tools::search::{SearchRequest, handle_search};
use crate::tools::select::{SelectRequest, handle_select};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

/// MCP server for dartdoc type-ahead queries
#[derive(Clone)]
pub struct SearchServer {
    /// Shared session state (config and index)
    state: Arc<SearchState>,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for SearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchServer")
            .field("state", &self.state)
            .finish()
    }
}

#[tool_router]
impl SearchServer {
    pub fn new(state: Arc<SearchState>) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Load a dartdoc index.json file. Replaces the current index only if the new file parses; on failure the previous index stays in place."
    )]
    async fn load_index(
        &self,
        Parameters(request): Parameters<LoadIndexRequest>,
    ) -> std::result::Result<String, String> {
        handle_load_index(&self.state, request).await
    }

    #[tool(
        description = "Find documentation entities (libraries, classes, methods, ...) matching a typed query. Exact and dart: library matches rank first, then prefix and substring matches; classes and libraries outrank members."
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.state, request).await
    }

    #[tool(
        description = "Resolve a chosen suggestion to its documentation page. Pass enclosed_by to pick between members with the same name."
    )]
    async fn select(
        &self,
        Parameters(request): Parameters<SelectRequest>,
    ) -> std::result::Result<String, String> {
        handle_select(&self.state, request).await
    }
}

#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "dartdoc-search: type-ahead search over a dartdoc index. \
                 Load an index.json with load_index (unless one was configured at startup), \
                 query it with search, and resolve a suggestion to its page with select.",
            )
    }
}
