//! Query evaluation: scoring every entity and ordering the candidates.

use super::tier::{PreparedQuery, Tier, utf16_len};
use super::weights::WeightTable;
use crate::entity::Entity;
use crate::index::Index;

/// A scored candidate produced while evaluating one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entity: &'a Entity,
    pub tier: Tier,
    pub score: u32,
}

/// Scores every entity against `query` and returns the candidates, best first.
///
/// Each entity contributes at most one candidate, from the best tier it
/// satisfies. Candidates are ordered by score descending, then by name length
/// ascending; equal pairs keep payload order. An empty query matches nothing.
pub fn rank<'a>(query: &str, index: &'a Index, weights: &WeightTable) -> Vec<Match<'a>> {
    let query = PreparedQuery::new(query);
    if query.is_empty() {
        tracing::debug!("Empty query, skipping evaluation");
        return Vec::new();
    }

    let mut matches: Vec<(Match<'a>, usize)> = index
        .all()
        .iter()
        .filter_map(|entity| {
            let tier = query.best_tier(&entity.name)?;
            let score = weights.apply(&entity.kind, tier.raw_score());
            Some((Match { entity, tier, score }, utf16_len(&entity.name)))
        })
        .collect();

    matches.sort_by(|(a, a_len), (b, b_len)| b.score.cmp(&a.score).then(a_len.cmp(b_len)));

    tracing::debug!(
        "Query '{}' matched {} of {} entities",
        query.as_str(),
        matches.len(),
        index.len()
    );

    matches.into_iter().map(|(m, _)| m).collect()
}

/// Ranked entities for `query`, scores dropped.
pub fn find_matches<'a>(query: &str, index: &'a Index, weights: &WeightTable) -> Vec<&'a Entity> {
    rank(query, index, weights)
        .into_iter()
        .map(|m| m.entity)
        .collect()
}
