//! Per-kind score divisors.

use crate::entity::EntityKind;
use serde::Deserialize;
use std::num::NonZeroU32;

const fn weight(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(value) => value,
        None => panic!("weights must be non-zero"),
    }
}

/// Maps each entity kind to the divisor applied to its raw tier score.
///
/// Lower weights rank higher. Libraries and classes default to 2, typedefs to
/// 3, members to 4. Any kind without its own entry, including `Unknown` and
/// unrecognized type strings, uses [`default`](Self::default).
///
/// Deserializes from a TOML table where every key is optional:
///
/// ```toml
/// [weights]
/// class = 1
/// default = 5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WeightTable {
    pub library: NonZeroU32,
    pub class: NonZeroU32,
    pub typedef: NonZeroU32,
    pub method: NonZeroU32,
    pub accessor: NonZeroU32,
    pub operator: NonZeroU32,
    pub property: NonZeroU32,
    pub constructor: NonZeroU32,
    pub default: NonZeroU32,
}

impl WeightTable {
    pub const STANDARD: Self = Self {
        library: weight(2),
        class: weight(2),
        typedef: weight(3),
        method: weight(4),
        accessor: weight(4),
        operator: weight(4),
        property: weight(4),
        constructor: weight(4),
        default: weight(4),
    };

    /// Divisor for the given kind.
    pub fn weight_of(&self, kind: &EntityKind) -> NonZeroU32 {
        match kind {
            EntityKind::Library => self.library,
            EntityKind::Class => self.class,
            EntityKind::Typedef => self.typedef,
            EntityKind::Method => self.method,
            EntityKind::Accessor => self.accessor,
            EntityKind::Operator => self.operator,
            EntityKind::Property => self.property,
            EntityKind::Constructor => self.constructor,
            EntityKind::Unknown | EntityKind::Other(_) => self.default,
        }
    }

    /// Final score for a raw tier score, truncating toward zero.
    pub fn apply(&self, kind: &EntityKind, raw: u32) -> u32 {
        raw / self.weight_of(kind)
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
