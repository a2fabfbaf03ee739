//! Matching tiers and their raw scores.
//!
//! Tiers come in two groups. The exact family is always tried; the substring
//! family only runs when the exact family found nothing and the query is long
//! enough. Within a group the first satisfied tier wins.

/// Prefix dartdoc gives to SDK library names (`dart:core`, `dart:async`, ...).
const SDK_LIBRARY_PREFIX: &str = "dart:";

/// Queries this short only ever produce exact-family matches.
///
/// Lengths are measured in UTF-16 code units, the unit dartdoc's browser
/// search uses, so a character outside the BMP counts as two.
pub const MAX_EXACT_ONLY_QUERY_LEN: usize = 2;

/// Length in UTF-16 code units.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// One named matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `name == query`
    Exact,
    /// `name == "dart:" + query`
    SdkLibrary,
    /// Same as [`Tier::SdkLibrary`], ignoring case.
    SdkLibraryIgnoreCase,
    /// Same as [`Tier::Exact`], ignoring case.
    ExactIgnoreCase,
    /// `name` starts with `query`.
    Prefix,
    PrefixIgnoreCase,
    /// `name` contains `query` anywhere.
    Contains,
    ContainsIgnoreCase,
}

impl Tier {
    pub const fn raw_score(self) -> u32 {
        match self {
            Self::Exact | Self::SdkLibrary => 2000,
            Self::SdkLibraryIgnoreCase => 1800,
            Self::ExactIgnoreCase => 1700,
            Self::Prefix => 750,
            Self::PrefixIgnoreCase => 650,
            Self::Contains => 500,
            Self::ContainsIgnoreCase => 400,
        }
    }

    pub const fn is_exact_family(self) -> bool {
        matches!(
            self,
            Self::Exact | Self::SdkLibrary | Self::SdkLibraryIgnoreCase | Self::ExactIgnoreCase
        )
    }
}

/// A query prepared once and reused against every entity.
#[derive(Debug, Clone)]
pub struct PreparedQuery<'q> {
    raw: &'q str,
    lower: String,
    sdk_library: String,
    lower_sdk_library: String,
    substring_enabled: bool,
}

impl<'q> PreparedQuery<'q> {
    pub fn new(query: &'q str) -> Self {
        let lower = query.to_lowercase();
        Self {
            raw: query,
            sdk_library: format!("{SDK_LIBRARY_PREFIX}{query}"),
            lower_sdk_library: format!("{SDK_LIBRARY_PREFIX}{lower}"),
            lower,
            substring_enabled: utf16_len(query) > MAX_EXACT_ONLY_QUERY_LEN,
        }
    }

    pub const fn as_str(&self) -> &'q str {
        self.raw
    }

    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Best tier this name satisfies, if any.
    ///
    /// Skips the substring family whenever the exact family matched or the
    /// query is too short for substring matching.
    pub fn best_tier(&self, name: &str) -> Option<Tier> {
        let lower_name = name.to_lowercase();
        self.exact_tier(name, &lower_name).or_else(|| {
            if self.substring_enabled {
                self.substring_tier(name, &lower_name)
            } else {
                None
            }
        })
    }

    fn exact_tier(&self, name: &str, lower_name: &str) -> Option<Tier> {
        if name == self.raw {
            Some(Tier::Exact)
        } else if name == self.sdk_library {
            Some(Tier::SdkLibrary)
        } else if lower_name == self.lower_sdk_library {
            Some(Tier::SdkLibraryIgnoreCase)
        } else if lower_name == self.lower {
            Some(Tier::ExactIgnoreCase)
        } else {
            None
        }
    }

    fn substring_tier(&self, name: &str, lower_name: &str) -> Option<Tier> {
        if name.starts_with(self.raw) {
            Some(Tier::Prefix)
        } else if lower_name.starts_with(&self.lower) {
            Some(Tier::PrefixIgnoreCase)
        } else if name.contains(self.raw) {
            Some(Tier::Contains)
        } else if lower_name.contains(&self.lower) {
            Some(Tier::ContainsIgnoreCase)
        } else {
            None
        }
    }
}
