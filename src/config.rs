//! Configuration file support for pkg-history.
//!
//! Provides YAML-based configuration through `pkg-history.config.yml` files,
//! plus the resolution of document sources from defaults, the config file
//! and command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{OutputFormat, DEFAULT_CATALOG_FILE, DEFAULT_HISTORY_FILE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkg-history.config.yml";

/// Raw location of the published repository documents
pub const DEFAULT_REMOTE_BASE_URL: &str =
    "https://raw.githubusercontent.com/philippleidig/twincatbsd-repository-history/refs/heads/main/";

/// Page address served by the local development server
pub const DEFAULT_DEV_URL: &str = "http://localhost:8000/docs/index.html";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub remote_base_url: Option<String>,
    pub local_dir: Option<PathBuf>,
    pub dev_url: Option<String>,
    pub catalog_file: Option<String>,
    pub history_file: Option<String>,
    pub format: Option<String>,
    pub expand_all: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, value) in [
        ("remote_base_url", &config.remote_base_url),
        ("dev_url", &config.dev_url),
    ] {
        if let Some(url) = value {
            validate_url(field, url)?;
        }
    }

    for (field, value) in [
        ("catalog_file", &config.catalog_file),
        ("history_file", &config.history_file),
    ] {
        if matches!(value, Some(name) if name.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field to use the default document name.",
                field
            );
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }
    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        bail!(
            "Invalid config: {} must not be empty.\n\n\
             💡 Hint: Remove the field to use the built-in default.",
            field
        );
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        bail!(
            "Invalid config: {} must be an http:// or https:// URL, got '{}'.",
            field,
            url
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct SourceOverrides {
    pub remote_base_url: Option<String>,
    pub local_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub expand_all: bool,
}

/// Fully resolved document sources and presentation defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub remote_base_url: String,
    pub local_dir: PathBuf,
    pub dev_url: String,
    pub catalog_file: String,
    pub history_file: String,
    pub format: OutputFormat,
    pub expand_all: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            local_dir: PathBuf::from("."),
            dev_url: DEFAULT_DEV_URL.to_string(),
            catalog_file: DEFAULT_CATALOG_FILE.to_string(),
            history_file: DEFAULT_HISTORY_FILE.to_string(),
            format: OutputFormat::default(),
            expand_all: false,
        }
    }
}

impl SourceConfig {
    /// Merges defaults, the config file and command-line overrides, in
    /// increasing order of precedence.
    ///
    /// # Errors
    /// Returns an error if an override URL is not http(s) or the config
    /// file names an unknown format.
    pub fn resolve(file: Option<&ConfigFile>, overrides: SourceOverrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = file {
            if let Some(ref url) = file.remote_base_url {
                config.remote_base_url = url.trim().to_string();
            }
            if let Some(ref dir) = file.local_dir {
                config.local_dir = dir.clone();
            }
            if let Some(ref url) = file.dev_url {
                config.dev_url = url.trim().to_string();
            }
            if let Some(ref name) = file.catalog_file {
                config.catalog_file = name.trim().to_string();
            }
            if let Some(ref name) = file.history_file {
                config.history_file = name.trim().to_string();
            }
            if let Some(ref format) = file.format {
                config.format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
            }
            if let Some(expand_all) = file.expand_all {
                config.expand_all = expand_all;
            }
        }

        if let Some(url) = overrides.remote_base_url {
            validate_url("--remote-base-url", &url)?;
            config.remote_base_url = url.trim().to_string();
        }
        if let Some(dir) = overrides.local_dir {
            config.local_dir = dir;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        config.expand_all |= overrides.expand_all;

        Ok(config)
    }

    /// Development mode is on when forced, or when the page address equals
    /// the development server address
    pub fn dev_mode(&self, forced: bool, page_url: Option<&str>) -> bool {
        forced || page_url.is_some_and(|url| is_develop(url, &self.dev_url))
    }
}

/// Exact comparison of the current page address with the development address
pub fn is_develop(page_url: &str, dev_url: &str) -> bool {
    page_url == dev_url
}
