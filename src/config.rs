//! Index configuration.
//!
//! Handles loading, validating, and merging an optional `config.toml` placed
//! in the document root. Stock defaults reproduce the archive's layout, so
//! most sites need no config file at all.
//!
//! ## Config File Location
//!
//! ```text
//! docs/
//! ├── config.toml              # Optional, overrides stock defaults
//! ├── assets/
//! │   └── dharma_index.json    # Default index output
//! ├── includes/                # UI fragments, never indexed
//! └── 01_birth/
//!     └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [index]
//! output = "assets/dharma_index.json"  # Relative to the document root
//! extension = "md"                     # Document file extension
//! exclude = ["includes", "assets"]     # Path segments never indexed
//!
//! [chapters]
//! index_file = "index.md"              # Files ending with this never warn
//! no_warning = ["card_view.md", "list_view.md", "index.md", "user.md"]
//!
//! [consolidate]
//! output = "consolidated.md"           # Relative to the document root
//! exclude = ["assets"]
//!
//! [samples]
//! dir = "sutras"                       # Where `samples` writes articles
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Everything a build needs besides the document root itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Discovery and output settings.
    pub index: IndexSettings,
    /// Missing-chapter warning policy.
    pub chapters: ChapterSettings,
    /// `consolidate` command settings.
    pub consolidate: ConsolidateSettings,
    /// `samples` command settings.
    pub samples: SampleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexSettings {
    /// Index file path. Relative paths resolve against the document root.
    pub output: PathBuf,
    /// Document extension, without the dot. Matched case-insensitively.
    pub extension: String,
    /// Path segments whose subtrees are never indexed.
    pub exclude: Vec<String>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("assets/dharma_index.json"),
            extension: "md".to_string(),
            exclude: vec!["includes".to_string(), "assets".to_string()],
        }
    }
}

/// Which files are expected to lack a `chapter` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChapterSettings {
    /// Any file name ending with this is treated as a section index.
    pub index_file: String,
    /// Exact file names that never produce a missing-chapter warning.
    pub no_warning: Vec<String>,
}

impl Default for ChapterSettings {
    fn default() -> Self {
        Self {
            index_file: "index.md".to_string(),
            no_warning: ["card_view.md", "list_view.md", "index.md", "user.md"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ChapterSettings {
    /// Whether a file with this name may omit `chapter` silently.
    pub fn expects_no_chapter(&self, file_name: &str) -> bool {
        self.no_warning.iter().any(|n| n == file_name)
            || (!self.index_file.is_empty() && file_name.ends_with(&self.index_file))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsolidateSettings {
    /// Consolidated file path. Relative paths resolve against the document root.
    pub output: PathBuf,
    /// Directory names skipped while consolidating.
    pub exclude: Vec<String>,
}

impl Default for ConsolidateSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("consolidated.md"),
            exclude: vec!["assets".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleSettings {
    /// Directory (under the document root) that receives sample chapters.
    pub dir: PathBuf,
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("sutras"),
        }
    }
}

impl IndexConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "index.output must not be empty".into(),
            ));
        }
        if self.index.extension.is_empty() {
            return Err(ConfigError::Validation(
                "index.extension must not be empty".into(),
            ));
        }
        if self.index.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "index.extension must not start with '.' (use \"md\", not \".md\")".into(),
            ));
        }
        if self.consolidate.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "consolidate.output must not be empty".into(),
            ));
        }
        if self.samples.dir.is_absolute() {
            return Err(ConfigError::Validation(
                "samples.dir must be relative to the document root".into(),
            ));
        }
        Ok(())
    }

    /// Resolved index file path for a document root.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.index.output)
    }

    /// Resolved consolidated file path for a document root.
    pub fn consolidate_path(&self, root: &Path) -> PathBuf {
        root.join(&self.consolidate.output)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(IndexConfig::default()).map_err(|e| {
        ConfigError::Validation(format!("stock defaults failed to serialize: {e}"))
    })
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no config file.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load the config for a document root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_config(root)? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# dharma-index configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the document root (next to the numbered chapter
# folders). Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Index build
# ---------------------------------------------------------------------------
[index]
# Where the JSON index is written, relative to the document root.
output = "assets/dharma_index.json"

# Extension of document files, without the dot.
extension = "md"

# Any path containing one of these segments is never indexed.
exclude = ["includes", "assets"]

# ---------------------------------------------------------------------------
# Chapter warnings
# ---------------------------------------------------------------------------
[chapters]
# Documents without a `chapter` field get their folder's name and a warning,
# except files ending with this name...
index_file = "index.md"

# ...and files with exactly these names.
no_warning = ["card_view.md", "list_view.md", "index.md", "user.md"]

# ---------------------------------------------------------------------------
# consolidate command
# ---------------------------------------------------------------------------
[consolidate]
# Single Markdown file receiving every document, relative to the root.
output = "consolidated.md"

# Directory names skipped while consolidating.
exclude = ["assets"]

# ---------------------------------------------------------------------------
# samples command
# ---------------------------------------------------------------------------
[samples]
# Directory under the document root receiving sample chapters.
dir = "sutras"
"##
}
