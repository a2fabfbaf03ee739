use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dartdoc-search")]
#[command(about = "Type-ahead search over a dartdoc index", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/dartdoc-search/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search tools over MCP on stdio
    Serve {
        #[arg(short, long)]
        index: Option<PathBuf>,
    },
    /// Print ranked suggestions for a query
    Search {
        query: String,
        #[arg(short, long)]
        index: Option<PathBuf>,
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Print the navigation target of an entity
    Select {
        name: String,
        /// Enclosing entity name
        #[arg(long = "from")]
        enclosed_by: Option<String>,
        #[arg(short, long)]
        index: Option<PathBuf>,
    },
}

impl Commands {
    pub const fn index(&self) -> Option<&PathBuf> {
        match self {
            Self::Serve { index } | Self::Search { index, .. } | Self::Select { index, .. } => {
                index.as_ref()
            }
        }
    }
}
