//! Type-ahead matching and ranking.
//!
//! Every entity is tested against a fixed ladder of tiers (exact, SDK library,
//! case-insensitive, prefix, contains). The raw tier score is divided by a
//! per-kind weight, and the candidates are sorted by score then name length.

pub(crate) mod ranker;
pub(crate) mod tier;
pub(crate) mod weights;

pub use ranker::{Match, find_matches, rank};
pub use tier::{MAX_EXACT_ONLY_QUERY_LEN, PreparedQuery, Tier, utf16_len};
pub use weights::WeightTable;
