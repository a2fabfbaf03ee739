//! Searchable documentation entities as they appear in a dartdoc `index.json`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Category of a documentation entity.
///
/// The recognized categories carry their own ranking weight (see
/// [`WeightTable`](crate::search::WeightTable)); anything else falls back to
/// the default weight. Unrecognized type strings are kept verbatim so they can
/// still be shown next to a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityKind {
    Library,
    Class,
    Typedef,
    Method,
    Accessor,
    Operator,
    Property,
    Constructor,
    #[default]
    Unknown,
    Other(String),
}

impl EntityKind {
    /// The payload spelling of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Library => "library",
            Self::Class => "class",
            Self::Typedef => "typedef",
            Self::Method => "method",
            Self::Accessor => "accessor",
            Self::Operator => "operator",
            Self::Property => "property",
            Self::Constructor => "constructor",
            Self::Unknown => "unknown",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for EntityKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "library" => Self::Library,
            "class" => Self::Class,
            "typedef" => Self::Typedef,
            "method" => Self::Method,
            "accessor" => Self::Accessor,
            "operator" => Self::Operator,
            "property" => Self::Property,
            "constructor" => Self::Constructor,
            "" | "unknown" => Self::Unknown,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for EntityKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Other(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weak, by-name reference to the entity lexically containing another one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingRef {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
}

/// A single searchable documentation item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Case-sensitive identifier; not globally unique.
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: EntityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosed_by: Option<EnclosingRef>,
    /// Navigation target, relative to the documentation root.
    #[serde(default, deserialize_with = "null_as_default")]
    pub href: String,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Entity {
    pub fn new(name: impl Into<String>, kind: impl Into<EntityKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            qualified_name: None,
            enclosed_by: None,
            href: String::new(),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = href.into();
        self
    }

    pub fn enclosed_in(mut self, name: impl Into<String>, kind: impl Into<EntityKind>) -> Self {
        self.enclosed_by = Some(EnclosingRef {
            name: name.into(),
            kind: Some(kind.into()),
        });
        self
    }

    /// Name of the enclosing entity, if any.
    pub fn parent_name(&self) -> Option<&str> {
        self.enclosed_by.as_ref().map(|parent| parent.name.as_str())
    }
}
