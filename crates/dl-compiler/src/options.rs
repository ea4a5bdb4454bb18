use dl_core::{FeatureFlag, FeatureSet, Target};

use crate::header::Header;

/// Error type for invalid compile settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("GoogleSearchPrefix and GoogleSearchFuzzy cannot be used together; run one compile per flag")]
    ConflictingGoogleSearch,
    #[error("Feature flag {flag} is not supported by target {target}")]
    UnsupportedFeature { flag: FeatureFlag, target: Target },
    #[error("Invalid header attribute '{0}': expected KEY=VALUE")]
    InvalidAttribute(String),
}

/// How Google search result links are compared against an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleSearchMode {
    /// `href^=`
    Prefix,
    /// `href*=`
    Fuzzy,
}

/// Settings for one compile run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub target: Target,
    pub features: FeatureSet,
    pub headers: Vec<Header>,
}

impl CompileOptions {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            features: FeatureSet::default(),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_features<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = FeatureFlag>,
    {
        self.features = FeatureSet::with_flags(flags);
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    /// Reject flag combinations the target cannot express.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let prefix = self.features.has(FeatureFlag::GoogleSearchPrefix);
        let fuzzy = self.features.has(FeatureFlag::GoogleSearchFuzzy);

        if prefix && fuzzy {
            return Err(OptionsError::ConflictingGoogleSearch);
        }

        // Google search rules are cosmetic filters, which only uBO understands
        if self.target != Target::UBlockOrigin && (prefix || fuzzy) {
            let flag = if prefix {
                FeatureFlag::GoogleSearchPrefix
            } else {
                FeatureFlag::GoogleSearchFuzzy
            };
            return Err(OptionsError::UnsupportedFeature {
                flag,
                target: self.target,
            });
        }

        Ok(())
    }

    pub fn google_search(&self) -> Option<GoogleSearchMode> {
        if self.features.has(FeatureFlag::GoogleSearchPrefix) {
            Some(GoogleSearchMode::Prefix)
        } else if self.features.has(FeatureFlag::GoogleSearchFuzzy) {
            Some(GoogleSearchMode::Fuzzy)
        } else {
            None
        }
    }
}
