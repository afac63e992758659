use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Directory holding the project-local config file
pub const CONFIG_DIR: &str = ".batchren";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Prefix used by the sequence action when `--prefix` is not given
    #[serde(default = "default_sequence_prefix")]
    pub sequence_prefix: String,

    /// First number of a sequence
    #[serde(default = "default_start_number")]
    pub start_number: u64,

    /// Zero-padded width of sequence numbers
    #[serde(default = "default_digit_width")]
    pub digit_width: usize,

    /// Whether transforms keep the original extension
    #[serde(default = "default_true")]
    pub keep_extension: bool,

    /// Default output format: "summary", "json" or "table"
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sequence_prefix: default_sequence_prefix(),
            start_number: default_start_number(),
            digit_width: default_digit_width(),
            keep_extension: true,
            output_format: default_output_format(),
            use_color: None,
        }
    }
}

fn default_sequence_prefix() -> String {
    "file_".to_string()
}

fn default_start_number() -> u64 {
    1
}

fn default_digit_width() -> usize {
    3
}

fn default_output_format() -> String {
    "summary".to_string()
}

fn default_true() -> bool {
    true
}

impl DefaultsConfig {
    /// Configured output format, falling back to summary for unknown values
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.parse().unwrap_or_else(|err| {
            tracing::warn!("{err}, using summary");
            OutputFormat::Summary
        })
    }
}

impl Config {
    /// Load config from `.batchren/config.toml` in the current directory,
    /// then from the user config directory, else use defaults.
    pub fn load() -> Result<Self> {
        for path in Self::candidate_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load_from_path(&path);
            }
        }

        // Return default config if no config file exists
        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("batchren").join(CONFIG_FILE));
        }
        paths
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
