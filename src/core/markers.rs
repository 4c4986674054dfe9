//! Suppression marker tokens and suppression policies.
//!
//! Two marker spellings are supported because both shipped historically:
//!
//! | Variant      | disable                 | enable                 | ignore file                 |
//! |--------------|-------------------------|------------------------|-----------------------------|
//! | `locscanner` | `locscanner:disable`    | `locscanner:enable`    | `locscanner:ignore`         |
//! | `teplovisor` | `// teplovisor:disable` | `// teplovisor:enable` | `// teplovisor:disable all` |
//!
//! Both use `NSLocalizedString(` as the already-localized marker.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Function call that marks a file as participating in localization.
pub const LOCALIZED_CALL: &str = "NSLocalizedString(";

/// Built-in marker spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerVariant {
    #[default]
    Locscanner,
    Teplovisor,
}

impl MarkerVariant {
    pub fn markers(self) -> Markers {
        match self {
            Self::Locscanner => Markers {
                disable: "locscanner:disable".to_string(),
                enable: "locscanner:enable".to_string(),
                ignore_file: "locscanner:ignore".to_string(),
                localized_call: LOCALIZED_CALL.to_string(),
            },
            Self::Teplovisor => Markers {
                disable: "// teplovisor:disable".to_string(),
                enable: "// teplovisor:enable".to_string(),
                ignore_file: "// teplovisor:disable all".to_string(),
                localized_call: LOCALIZED_CALL.to_string(),
            },
        }
    }

    /// The policy each variant historically applied.
    pub fn default_policy(self) -> SuppressionPolicy {
        match self {
            Self::Locscanner => SuppressionPolicy::RegionExclusion,
            Self::Teplovisor => SuppressionPolicy::PairPresence,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locscanner => "locscanner",
            Self::Teplovisor => "teplovisor",
        }
    }
}

/// Marker tokens recognized inside source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Markers {
    /// Starts a suppressed region.
    pub disable: String,
    /// Ends a suppressed region.
    pub enable: String,
    /// Exempts the whole file.
    pub ignore_file: String,
    /// Presence means the file is already localized.
    #[serde(default = "default_localized_call")]
    pub localized_call: String,
}

fn default_localized_call() -> String {
    LOCALIZED_CALL.to_string()
}

impl Default for Markers {
    fn default() -> Self {
        MarkerVariant::default().markers()
    }
}

impl Markers {
    /// Names of tokens that are empty. Empty tokens would match everywhere.
    pub fn empty_tokens(&self) -> Vec<&'static str> {
        [
            ("disable", &self.disable),
            ("enable", &self.enable),
            ("ignoreFile", &self.ignore_file),
            ("localizedCall", &self.localized_call),
        ]
        .into_iter()
        .filter(|(_, token)| token.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// How disable/enable pairs affect a file's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuppressionPolicy {
    /// Literals are only looked for outside suppressed regions.
    RegionExclusion,
    /// A matching file is flagged only if it has no disable token, or the
    /// last disable token is never re-enabled.
    PairPresence,
}

impl SuppressionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RegionExclusion => "region-exclusion",
            Self::PairPresence => "pair-presence",
        }
    }
}
