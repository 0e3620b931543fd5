use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{NeuronTagError, Result};
use crate::report::{ScanOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# neuron-tag configuration file
# Location: ~/.neuron-tag/config.toml
#
# Note: the tagging rule tables themselves are compiled into the tool
# and are not configurable here; this file only controls how `scan`
# walks a documentation tree.

[scan]
# Directories to skip when scanning a documentation tree
# Default: [".git", "_build"]
# Example: exclude = [".git", "_build", "archive"]
exclude = [".git", "_build"]

# Directories to always scan (overrides exclude)
# Default: []
# Example: include = ["_build"]
include = []

# Source file extensions treated as documentation pages
# Default: ["rst", "md"]
extensions = ["rst", "md"]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Scan-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Directories to skip
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Directories to scan even when excluded (overrides exclude)
    #[serde(default)]
    pub include: Vec<String>,

    /// Source extensions treated as documentation pages
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_exclude() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude: default_exclude(),
            include: Vec::new(),
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| NeuronTagError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| NeuronTagError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "scan.exclude" => Some(format!("{:?}", self.scan.exclude)),
            "scan.include" => Some(format!("{:?}", self.scan.include)),
            "scan.extensions" => Some(format!("{:?}", self.scan.extensions)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "scan.exclude" => {
                self.scan.exclude = parse_string_list(value);
                Ok(())
            }
            "scan.include" => {
                self.scan.include = parse_string_list(value);
                Ok(())
            }
            "scan.extensions" => {
                self.scan.extensions = parse_string_list(value);
                Ok(())
            }
            _ => Err(NeuronTagError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        vec![
            (
                "scan.exclude".to_string(),
                format!("{:?}", self.scan.exclude),
            ),
            (
                "scan.include".to_string(),
                format!("{:?}", self.scan.include),
            ),
            (
                "scan.extensions".to_string(),
                format!("{:?}", self.scan.extensions),
            ),
        ]
    }

    /// Convert to ScanOptions for use in scan
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            excluded_dirs: self.scan.exclude.clone(),
            included_dirs: self.scan.include.clone(),
            extensions: self.scan.extensions.clone(),
        }
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Vec<String> {
    let trimmed = value.trim();

    // JSON array format: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
