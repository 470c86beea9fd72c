//! Runtime configuration for brewls.
//!
//! Configuration comes from the environment and is read exactly once at
//! startup into an [`AppConfig`], which is then passed by parameter.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Comma-separated list of enabled feature flags.
pub const FEATURE_FLAGS_ENV: &str = "BREWLS_FEATURE_FLAGS";

/// Explicit path to the brew executable.
pub const BREW_BIN_ENV: &str = "BREWLS_BREW_BIN";

/// Features that can be toggled through [`FEATURE_FLAGS_ENV`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    /// Sort report rows by display name
    SortedOutput,
    /// Suppress progress messages on stderr
    Quiet,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::SortedOutput, Feature::Quiet];

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::SortedOutput => "sorted",
            Feature::Quiet => "quiet",
        }
    }
}

/// Parsed set of feature flag names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    names: BTreeSet<String>,
}

impl FeatureFlags {
    /// Parses a comma-separated list; names are trimmed and lower-cased,
    /// blanks and duplicates are dropped.
    pub fn parse(raw: &str) -> Self {
        let names = raw
            .split(',')
            .map(normalize_flag)
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    pub fn is_enabled(&self, flag: &str) -> bool {
        let flag = normalize_flag(flag);
        !flag.is_empty() && self.names.contains(&flag)
    }

    pub fn is_feature_enabled(&self, feature: Feature) -> bool {
        self.is_enabled(feature.as_str())
    }

    /// Flag names that do not correspond to any [`Feature`]
    pub fn unknown_flags(&self) -> Vec<&str> {
        self.names()
            .filter(|name| !Feature::ALL.iter().any(|f| f.as_str() == *name))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

fn normalize_flag(flag: &str) -> String {
    flag.trim().to_lowercase()
}

/// Application configuration constructed once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub feature_flags: FeatureFlags,
    /// Explicit brew executable; `None` means search PATH
    pub brew_binary: Option<PathBuf>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let feature_flags = lookup(FEATURE_FLAGS_ENV)
            .map(|raw| FeatureFlags::parse(&raw))
            .unwrap_or_default();

        let brew_binary = lookup(BREW_BIN_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            feature_flags,
            brew_binary,
        }
    }

    pub fn sorted_output(&self) -> bool {
        self.feature_flags.is_feature_enabled(Feature::SortedOutput)
    }

    pub fn quiet(&self) -> bool {
        self.feature_flags.is_feature_enabled(Feature::Quiet)
    }
}
