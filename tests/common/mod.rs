//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `sdk_index`: a temp directory holding a small dartdoc `index.json`
//! - `empty_state`: a `SearchState` that has not loaded anything yet
//!
//! [`load_sdk_state`] turns an `sdk_index` into a loaded session.

use dartdoc_search::{Config, SearchState};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Excerpt shaped like a real dartdoc `index.json` for the Dart SDK.
pub const SDK_INDEX: &str = r#"[
  {"name": "dart:collection", "qualifiedName": "dart:collection", "href": "dart-collection/dart-collection-library.html", "type": "library", "overriddenDepth": 0},
  {"name": "dart:core", "qualifiedName": "dart:core", "href": "dart-core/dart-core-library.html", "type": "library", "overriddenDepth": 0},
  {"name": "dart:io", "qualifiedName": "dart:io", "href": "dart-io/dart-io-library.html", "type": "library", "overriddenDepth": 0},
  {"name": "List", "qualifiedName": "dart:core.List", "href": "dart-core/List-class.html", "type": "class", "overriddenDepth": 0, "enclosedBy": {"name": "dart:core", "type": "library"}},
  {"name": "ListMixin", "qualifiedName": "dart:collection.ListMixin", "href": "dart-collection/ListMixin-mixin.html", "type": "class", "overriddenDepth": 0, "enclosedBy": {"name": "dart:collection", "type": "library"}},
  {"name": "UnmodifiableListView", "qualifiedName": "dart:collection.UnmodifiableListView", "href": "dart-collection/UnmodifiableListView-class.html", "type": "class", "overriddenDepth": 0, "enclosedBy": {"name": "dart:collection", "type": "library"}},
  {"name": "add", "qualifiedName": "dart:core.List.add", "href": "dart-core/List/add.html", "type": "method", "overriddenDepth": 0, "enclosedBy": {"name": "List", "type": "class"}},
  {"name": "add", "qualifiedName": "dart:core.Set.add", "href": "dart-core/Set/add.html", "type": "method", "overriddenDepth": 0, "enclosedBy": {"name": "Set", "type": "class"}},
  {"name": "length", "qualifiedName": "dart:core.List.length", "href": "dart-core/List/length.html", "type": "property", "overriddenDepth": 0, "enclosedBy": {"name": "List", "type": "class"}},
  {"name": "List.filled", "qualifiedName": "dart:core.List.filled", "href": "dart-core/List/List.filled.html", "type": "constructor", "overriddenDepth": 0, "enclosedBy": {"name": "List", "type": "class"}},
  {"name": "abstract", "qualifiedName": "abstract", "href": "keywords/abstract.html", "type": "keyword", "overriddenDepth": 0},
  {"name": "Comparator", "qualifiedName": "dart:core.Comparator", "href": "dart-core/Comparator.html", "type": "typedef", "overriddenDepth": 0, "enclosedBy": {"name": "dart:core", "type": "library"}}
]"#;

/// A temporary directory holding an index file.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct IndexFixture {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl IndexFixture {
    /// Writes `content` to `index.json` inside a fresh temp directory.
    ///
    /// # Panics
    /// Panics if the temp directory or file cannot be created.
    pub fn with_content(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("index.json");
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    /// Path to the index file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a sibling file, returning its path.
    pub fn sibling(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path.with_file_name(name);
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        path
    }
}

/// The SDK excerpt written to disk.
#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn sdk_index() -> IndexFixture {
    dartdoc_search::tracing::init();
    IndexFixture::with_content(SDK_INDEX)
}

/// A session that has not loaded an index.
#[allow(dead_code)] // Used by some integration test crates only
#[fixture]
pub fn empty_state() -> Arc<SearchState> {
    Arc::new(SearchState::new(Config::default()))
}

/// Loads the SDK excerpt into a fresh session.
///
/// Returns the fixture too, since dropping it deletes the file.
#[allow(dead_code)] // Used by some integration test crates only
pub async fn load_sdk_state(sdk_index: IndexFixture) -> (IndexFixture, Arc<SearchState>) {
    let state = Arc::new(SearchState::new(Config::default()));
    state
        .load_index(sdk_index.path())
        .await
        .expect("Failed to load SDK index fixture");
    (sdk_index, state)
}
