//! Omniglot configuration file handling

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level Omniglot configuration (omniglot.toml)
#[derive(Debug, Default, Deserialize)]
pub struct OmniglotConfig {
    #[serde(default)]
    pub mapping: MappingConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Variant mapping resource location
#[derive(Debug, Deserialize)]
pub struct MappingConfig {
    #[serde(default = "default_mapping_path")]
    pub path: PathBuf,
}

fn default_mapping_path() -> PathBuf {
    PathBuf::from("resources/language-variants.yaml")
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            path: default_mapping_path(),
        }
    }
}

/// Fallback behavior when the preference list comes out empty
#[derive(Debug, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl OmniglotConfig {
    /// Load configuration from a directory (looks for omniglot.toml).
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join("omniglot.toml")
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: OmniglotConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }
}
