use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{MarkerVariant, Markers, SuppressionPolicy};

pub const CONFIG_FILE_NAME: &str = ".locscanrc.json";

/// Marker tokens: a built-in variant name or explicit tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum MarkerConfig {
    Variant(MarkerVariant),
    Custom(Markers),
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self::Variant(MarkerVariant::default())
    }
}

impl MarkerConfig {
    pub fn markers(&self) -> Markers {
        match self {
            Self::Variant(variant) => variant.markers(),
            Self::Custom(markers) => markers.clone(),
        }
    }

    /// Policy used when none is configured. Custom tokens default to region exclusion.
    pub fn default_policy(&self) -> SuppressionPolicy {
        match self {
            Self::Variant(variant) => variant.default_policy(),
            Self::Custom(_) => SuppressionPolicy::RegionExclusion,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,
    #[serde(default = "default_excluded_directories")]
    pub excluded_directories: Vec<String>,
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub markers: MarkerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<SuppressionPolicy>,
}

fn default_file_extensions() -> Vec<String> {
    ["swift", "xib", "m", "storyboard"].map(String::from).to_vec()
}

fn default_excluded_directories() -> Vec<String> {
    ["Pods", "Tests", "UITests", "UnitTests"]
        .map(String::from)
        .to_vec()
}

fn default_output_file_name() -> String {
    "output.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: default_file_extensions(),
            excluded_directories: default_excluded_directories(),
            output_file_name: default_output_file_name(),
            ignores: Vec::new(),
            markers: MarkerConfig::default(),
            policy: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, empty
    /// extensions, an empty output file name, or empty marker tokens.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.file_extensions.iter().any(|ext| ext.is_empty()) {
            bail!("'fileExtensions' must not contain empty entries");
        }

        if self.output_file_name.is_empty() {
            bail!("'outputFileName' must not be empty");
        }

        let empty = self.markers.markers().empty_tokens();
        if !empty.is_empty() {
            bail!("Marker tokens must not be empty: {}", empty.join(", "));
        }

        Ok(())
    }

    /// Policy in effect: explicit setting, else the marker variant's default.
    pub fn effective_policy(&self) -> SuppressionPolicy {
        self.policy
            .unwrap_or_else(|| self.markers.default_policy())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the loaded file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

/// Find and parse the config file. Validation is left to the caller, which
/// runs it once CLI overrides have been applied.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
