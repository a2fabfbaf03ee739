pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod format;
pub mod index;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use config::Config;
pub use entity::{EnclosingRef, Entity, EntityKind};
pub use error::MalformedIndexError;
pub use index::{Index, IndexState, IndexStore};
pub use search::{Match, Tier, WeightTable, find_matches, rank};
pub use state::SearchState;
