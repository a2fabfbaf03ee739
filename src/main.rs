use anyhow::{Context, anyhow};
use clap::Parser;
use dartdoc_search::cli::{Cli, Commands};
use dartdoc_search::config::Config;
use dartdoc_search::server::SearchServer;
use dartdoc_search::state::SearchState;
use dartdoc_search::tools::{SearchRequest, SelectRequest, handle_search, handle_select};
use rmcp::{ServiceExt, transport::stdio};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dartdoc_search::tracing::init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(index) = cli.command.index() {
        config.index_path = Some(index.clone());
    }

    let state = Arc::new(SearchState::new(config));

    match cli.command {
        Commands::Serve { .. } => {
            tracing::info!("Starting dartdoc-search MCP server");
            state.load_configured_index().await;

            let server = SearchServer::new(state);
            let service = server.serve(stdio()).await.inspect_err(|e| {
                tracing::error!("Error serving MCP server: {:?}", e);
            })?;

            service.waiting().await?;
        }
        Commands::Search { query, limit, .. } => {
            load_required_index(&state).await?;
            let output = handle_search(&state, SearchRequest { query, limit })
                .await
                .map_err(|e| anyhow!(e))?;
            println!("{}", output);
        }
        Commands::Select {
            name, enclosed_by, ..
        } => {
            load_required_index(&state).await?;
            let href = handle_select(&state, SelectRequest { name, enclosed_by })
                .await
                .map_err(|e| anyhow!(e))?;
            println!("{}", href);
        }
    }

    Ok(())
}

/// One-shot commands cannot wait for a later load, so a missing index is fatal.
async fn load_required_index(state: &SearchState) -> anyhow::Result<()> {
    let path = state
        .config()
        .index_path
        .clone()
        .context("No index given. Pass --index or set index_path in the config file")?;
    state.load_index(&path).await?;
    Ok(())
}
