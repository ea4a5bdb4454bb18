//! Core type definitions for the deny-list compiler
//!
//! These types mirror the JSON entry format and are used throughout the
//! filter and renderer stages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::UnknownNameError;

// =============================================================================
// Match Methods
// =============================================================================

/// How an entry's value is matched against a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum MatchMethod {
    /// The value is matched as-is
    #[serde(rename = "literal")]
    Literal,
}

// =============================================================================
// Feature Flags
// =============================================================================

/// Named opt-in gate attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    /// Always active
    Base,
    /// Hide Google search results whose link starts with the entry.
    GoogleSearchPrefix,
    /// Hide Google search results whose link contains the entry.
    GoogleSearchFuzzy,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 3] = [
        Self::Base,
        Self::GoogleSearchPrefix,
        Self::GoogleSearchFuzzy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::GoogleSearchPrefix => "GoogleSearchPrefix",
            Self::GoogleSearchFuzzy => "GoogleSearchFuzzy",
        }
    }
}

impl FromStr for FeatureFlag {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| UnknownNameError {
                kind: "feature flag",
                name: s.to_string(),
                expected: "Base, GoogleSearchPrefix, GoogleSearchFuzzy",
            })
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature tag as written on an entry.
///
/// Unknown names are kept rather than rejected: they simply never become
/// active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryFeature {
    Known(FeatureFlag),
    Unrecognized(String),
}

impl Default for EntryFeature {
    fn default() -> Self {
        Self::Known(FeatureFlag::Base)
    }
}

impl From<FeatureFlag> for EntryFeature {
    fn from(flag: FeatureFlag) -> Self {
        Self::Known(flag)
    }
}

impl<'de> Deserialize<'de> for EntryFeature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(match name {
            None => Self::default(),
            Some(name) => match name.parse::<FeatureFlag>() {
                Ok(flag) => Self::Known(flag),
                Err(_) => Self::Unrecognized(name),
            },
        })
    }
}

impl fmt::Display for EntryFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(flag) => fmt::Display::fmt(flag, f),
            Self::Unrecognized(name) => f.write_str(name),
        }
    }
}

bitflags::bitflags! {
    /// Set of active feature flags. `BASE` is always present.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FeatureSet: u8 {
        const BASE = 1 << 0;
        const GOOGLE_SEARCH_PREFIX = 1 << 1;
        const GOOGLE_SEARCH_FUZZY = 1 << 2;

        /// Any Google search rule generation
        const GOOGLE_SEARCH = Self::GOOGLE_SEARCH_PREFIX.bits() | Self::GOOGLE_SEARCH_FUZZY.bits();
    }
}

impl FeatureSet {
    /// Build a set from selected flags. `Base` is added implicitly.
    pub fn with_flags<I>(flags: I) -> Self
    where
        I: IntoIterator<Item = FeatureFlag>,
    {
        flags.into_iter().fold(Self::BASE, |set, flag| set | Self::from(flag))
    }

    pub fn has(self, flag: FeatureFlag) -> bool {
        self.contains(Self::from(flag))
    }

    /// Whether an entry tagged with `feature` passes this set.
    pub fn is_active(self, feature: &EntryFeature) -> bool {
        match feature {
            EntryFeature::Known(flag) => self.has(*flag),
            EntryFeature::Unrecognized(_) => false,
        }
    }

    /// Active flags in declaration order.
    pub fn flags(self) -> impl Iterator<Item = FeatureFlag> {
        FeatureFlag::ALL.into_iter().filter(move |flag| self.has(*flag))
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::BASE
    }
}

impl From<FeatureFlag> for FeatureSet {
    fn from(flag: FeatureFlag) -> Self {
        match flag {
            FeatureFlag::Base => Self::BASE,
            FeatureFlag::GoogleSearchPrefix => Self::GOOGLE_SEARCH_PREFIX,
            FeatureFlag::GoogleSearchFuzzy => Self::GOOGLE_SEARCH_FUZZY,
        }
    }
}

// =============================================================================
// Entries
// =============================================================================

/// One deny-list item.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum Entry {
    /// Blocks a whole host
    #[serde(rename = "domain")]
    Domain {
        #[serde(rename = "match")]
        match_method: MatchMethod,
        domain: String,
        #[serde(default, alias = "feature_flag")]
        feature: EntryFeature,
    },
    /// Blocks a URL or a host + path fragment
    #[serde(rename = "path")]
    Path {
        #[serde(rename = "match")]
        match_method: MatchMethod,
        path: String,
        #[serde(default, alias = "feature_flag")]
        feature: EntryFeature,
    },
}

impl Entry {
    /// Literal domain entry with no feature gate.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self::Domain {
            match_method: MatchMethod::Literal,
            domain: domain.into(),
            feature: EntryFeature::default(),
        }
    }

    /// Literal path entry with no feature gate.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path {
            match_method: MatchMethod::Literal,
            path: path.into(),
            feature: EntryFeature::default(),
        }
    }

    #[must_use]
    pub fn with_feature(mut self, tag: impl Into<EntryFeature>) -> Self {
        match &mut self {
            Self::Domain { feature, .. } | Self::Path { feature, .. } => *feature = tag.into(),
        }
        self
    }

    pub fn match_method(&self) -> MatchMethod {
        match self {
            Self::Domain { match_method, .. } | Self::Path { match_method, .. } => *match_method,
        }
    }

    /// The domain or path string.
    pub fn value(&self) -> &str {
        match self {
            Self::Domain { domain, .. } => domain,
            Self::Path { path, .. } => path,
        }
    }

    pub fn feature(&self) -> &EntryFeature {
        match self {
            Self::Domain { feature, .. } | Self::Path { feature, .. } => feature,
        }
    }

    /// JSON field name holding the value.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Domain { .. } => "domain",
            Self::Path { .. } => "path",
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

// =============================================================================
// Compile Targets
// =============================================================================

/// Output list dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// uBlock Origin static filter list
    UBlockOrigin,
    /// uBlacklist subscription
    UBlacklist,
}

impl Target {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UBlockOrigin => "uBlockOrigin",
            Self::UBlacklist => "uBlacklist",
        }
    }
}

impl FromStr for Target {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uBlockOrigin" => Ok(Self::UBlockOrigin),
            // Older lists spelled it with a capital L
            "uBlacklist" | "uBlackList" => Ok(Self::UBlacklist),
            _ => Err(UnknownNameError {
                kind: "target",
                name: s.to_string(),
                expected: "uBlockOrigin, uBlacklist",
            }),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
