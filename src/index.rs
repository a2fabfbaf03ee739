//! Index storage: parsing the entity payload and holding the loaded index.
//!
//! An [`Index`] is immutable once built. The [`IndexStore`] models the
//! `unloaded → loaded` lifecycle and swaps in a freshly parsed index in a
//! single write, so readers observe either the previous index or the new one.

use crate::entity::Entity;
use crate::error::{MalformedIndexError, Result};
use anyhow::Context;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Ordered, read-only collection of searchable entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entities: Vec<Entity>,
}

impl Index {
    /// Build an index from already-validated entities.
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Parse a raw JSON payload into an index.
    pub fn parse(raw: &str) -> std::result::Result<Self, MalformedIndexError> {
        let value: Value = serde_json::from_str(raw).map_err(MalformedIndexError::Syntax)?;
        Self::from_value(value)
    }

    /// Build an index from an already-deserialized JSON payload.
    ///
    /// Every element must be an entity-shaped record with a non-empty `name`;
    /// all other fields are optional. Duplicate names are expected.
    pub fn from_value(value: Value) -> std::result::Result<Self, MalformedIndexError> {
        let records = match value {
            Value::Array(records) => records,
            other => {
                return Err(MalformedIndexError::NotASequence {
                    found: json_kind(&other),
                });
            }
        };

        let mut entities = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            let entity: Entity = serde_json::from_value(record)
                .map_err(|source| MalformedIndexError::Record { position, source })?;
            if entity.name.is_empty() {
                return Err(MalformedIndexError::EmptyName { position });
            }
            entities.push(entity);
        }

        Ok(Self { entities })
    }

    /// All entities, in payload order.
    pub fn all(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Find the entity a user picked from the suggestion list.
    ///
    /// Names repeat across enclosing scopes, so `enclosed_by` narrows the
    /// lookup to entities whose parent carries that name. The first match in
    /// payload order wins.
    pub fn select(&self, name: &str, enclosed_by: Option<&str>) -> Option<&Entity> {
        self.entities.iter().find(|entity| {
            entity.name == name
                && enclosed_by.is_none_or(|parent| entity.parent_name() == Some(parent))
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Lifecycle of the index held by a search session.
#[derive(Debug, Clone, Default)]
pub enum IndexState {
    #[default]
    Unloaded,
    Loaded {
        index: Arc<Index>,
        /// Where the payload came from, if it was read from disk.
        source: Option<PathBuf>,
    },
}

/// Holds the current index for a session.
///
/// Loads are atomic: a failed load leaves the previous state untouched, and a
/// successful one replaces the whole `Arc<Index>` at once.
#[derive(Debug, Default)]
pub struct IndexStore {
    state: RwLock<IndexState>,
}

impl IndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current index, or `None` while still unloaded.
    pub async fn snapshot(&self) -> Option<Arc<Index>> {
        match &*self.state.read().await {
            IndexState::Unloaded => None,
            IndexState::Loaded { index, .. } => Some(Arc::clone(index)),
        }
    }

    pub async fn is_loaded(&self) -> bool {
        matches!(*self.state.read().await, IndexState::Loaded { .. })
    }

    /// Path the current index was read from, if any.
    pub async fn source(&self) -> Option<PathBuf> {
        match &*self.state.read().await {
            IndexState::Loaded { source, .. } => source.clone(),
            IndexState::Unloaded => None,
        }
    }

    /// Install an already-built index, replacing whatever was loaded.
    pub async fn install(&self, index: Index, source: Option<PathBuf>) -> Arc<Index> {
        let index = Arc::new(index);
        *self.state.write().await = IndexState::Loaded {
            index: Arc::clone(&index),
            source,
        };
        index
    }

    /// Read, parse and install an index file.
    ///
    /// Parsing completes before the write lock is taken, so no reader ever
    /// waits on (or observes) a half-built index.
    pub async fn load_file(&self, path: &Path) -> Result<Arc<Index>> {
        let start = std::time::Instant::now();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read index file {}", path.display()))?;

        let index = Index::parse(&raw)
            .with_context(|| format!("Failed to parse index file {}", path.display()))?;

        tracing::info!(
            "Loaded search index from {} ({} entities in {:?})",
            path.display(),
            index.len(),
            start.elapsed()
        );

        Ok(self.install(index, Some(path.to_path_buf())).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;
    use crate::search::WeightTable;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let raw = r#"[
            {"name": "add", "type": "method", "enclosedBy": {"name": "List"}},
            {"name": "List", "type": "class"},
            {"name": "add", "type": "method", "enclosedBy": {"name": "Set"}}
        ]"#;
        let index = Index::parse(raw).unwrap();

        let names: Vec<&str> = index.all().iter().map(|e| e.name.as_str()).collect();
        check!(names == ["add", "List", "add"]);
        check!(index.all()[1].kind == EntityKind::Class);
    }

    #[test]
    fn test_parse_empty_array() {
        let index = Index::parse("[]").unwrap();
        check!(index.is_empty());
    }

    #[rstest]
    #[case("{\"name\": \"List\"}", "an object")]
    #[case("\"List\"", "a string")]
    #[case("null", "null")]
    fn test_parse_rejects_non_sequence(#[case] raw: &str, #[case] expected: &str) {
        let_assert!(Err(MalformedIndexError::NotASequence { found }) = Index::parse(raw));
        check!(found == expected);
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let_assert!(Err(MalformedIndexError::Syntax(_)) = Index::parse("[{\"name\": "));
    }

    #[test]
    fn test_parse_reports_record_missing_name() {
        let raw = r#"[{"name": "List"}, {"type": "class", "href": "x.html"}]"#;
        let_assert!(Err(MalformedIndexError::Record { position, .. }) = Index::parse(raw));
        check!(position == 1);
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        let_assert!(Err(MalformedIndexError::EmptyName { position }) = Index::parse(r#"[{"name": ""}]"#));
        check!(position == 0);
    }

    #[rstest]
    #[case(r#"[{"name": "List", "type": null}]"#)]
    #[case(r#"[{"name": "List", "href": null}]"#)]
    #[case(r#"[{"name": "List", "type": null, "href": null, "enclosedBy": null}]"#)]
    fn test_parse_null_optional_fields_default(#[case] raw: &str) {
        let_assert!(Ok(index) = Index::parse(raw));
        let entity = &index.all()[0];

        check!(entity.name == "List");
        check!(entity.kind == EntityKind::Unknown);
        check!(entity.href.is_empty());
        check!(entity.enclosed_by.is_none());
        check!(WeightTable::default().weight_of(&entity.kind).get() == 4);
    }

    #[test]
    fn test_select_narrows_by_parent() {
        let index = Index::new(vec![
            Entity::new("add", "method")
                .enclosed_in("List", "class")
                .with_href("dart-core/List/add.html"),
            Entity::new("add", "method")
                .enclosed_in("Set", "class")
                .with_href("dart-core/Set/add.html"),
        ]);

        check!(index.select("add", None).unwrap().href == "dart-core/List/add.html");
        check!(index.select("add", Some("Set")).unwrap().href == "dart-core/Set/add.html");
        check!(index.select("add", Some("Map")).is_none());
        check!(index.select("remove", None).is_none());
    }

    #[tokio::test]
    async fn test_store_starts_unloaded() {
        let store = IndexStore::new();
        let loaded = store.is_loaded().await;
        let snapshot = store.snapshot().await;
        check!(!loaded);
        check!(snapshot.is_none());
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_index() {
        let store = IndexStore::new();
        store
            .install(Index::new(vec![Entity::new("List", "class")]), None)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let result = store.load_file(&path).await;
        check!(result.is_err());

        let snapshot = store.snapshot().await.unwrap();
        check!(snapshot.len() == 1);
        check!(snapshot.all()[0].name == "List");
    }

    #[tokio::test]
    async fn test_reload_replaces_index() {
        let store = IndexStore::new();
        let first = store
            .install(Index::new(vec![Entity::new("List", "class")]), None)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");
        std::fs::write(&path, r#"[{"name": "Map"}, {"name": "Set"}]"#).unwrap();

        let second = store.load_file(&path).await.unwrap();

        // Readers holding the old snapshot keep a complete view of it.
        check!(first.len() == 1);
        check!(second.len() == 2);
        let current = store.snapshot().await.unwrap();
        let source = store.source().await;
        check!(current.len() == 2);
        check!(source == Some(path));
    }
}
