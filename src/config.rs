//! Configuration file support for license-gatherer.
//!
//! Provides YAML-based configuration through `license-gatherer.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::filesystem::DEFAULT_OUTPUT_FILE;
use crate::ports::outbound::ProgressReporter;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-gatherer.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub exclude_packages: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings for one run after merging CLI options over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub output_path: PathBuf,
    pub exclude_patterns: Vec<String>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes to nothing at all
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(output) = &config.output {
        if output.trim().is_empty() {
            bail!(
                "Invalid config: output must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default ({}).",
                DEFAULT_OUTPUT_FILE
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
pub fn warn_unknown_fields(config: &ConfigFile, reporter: &impl ProgressReporter) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        reporter.report_error(&format!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        ));
    }
}

/// Merges CLI options with the config file.
///
/// The CLI output path wins over the config file, which wins over
/// `LICENSEALL.md`. Exclusion patterns from both sources are combined,
/// CLI patterns first, without duplicates.
pub fn resolve_settings(
    cli_output: Option<String>,
    cli_exclude: Vec<String>,
    config: Option<ConfigFile>,
) -> ResolvedSettings {
    let config = config.unwrap_or_default();

    let output_path = cli_output
        .or(config.output)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    let mut exclude_patterns = cli_exclude;
    for pattern in config.exclude_packages.unwrap_or_default() {
        if !exclude_patterns.contains(&pattern) {
            exclude_patterns.push(pattern);
        }
    }

    ResolvedSettings {
        output_path,
        exclude_patterns,
    }
}
