use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ExportError, Result};
use crate::types::EdgeFormat;

/// Name of the settings file stored inside the `.vaultgraph` directory.
pub const CONFIG_FILENAME: &str = "config.json";

/// Name of the hidden directory used to store vaultgraph metadata.
pub const VAULTGRAPH_DIR: &str = ".vaultgraph";

/// Persisted export settings for a vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Directory prefix bounding the export; empty exports the whole vault.
    pub target_directory: String,
    /// Edge key convention used in the exported artifact.
    pub edge_format: EdgeFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            version: 1,
            target_directory: String::new(),
            edge_format: EdgeFormat::SourceTarget,
        }
    }
}

/// Returns the path to the `.vaultgraph` directory within the given vault root.
pub fn get_vaultgraph_dir(vault_root: &Path) -> PathBuf {
    vault_root.join(VAULTGRAPH_DIR)
}

/// Returns the path to the settings file (`config.json`) within the `.vaultgraph` directory.
pub fn get_config_path(vault_root: &Path) -> PathBuf {
    get_vaultgraph_dir(vault_root).join(CONFIG_FILENAME)
}

/// Loads the settings from disk.
///
/// If the settings file does not exist, returns the default configuration
/// (whole-vault scope, current edge format).
pub fn load_config(vault_root: &Path) -> Result<ExportConfig> {
    let config_path = get_config_path(vault_root);

    if !config_path.exists() {
        return Ok(ExportConfig::default());
    }

    let contents = fs::read_to_string(&config_path).map_err(|e| ExportError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: ExportConfig =
        serde_json::from_str(&contents).map_err(|e| ExportError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    Ok(config)
}

/// Saves the settings to disk using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location,
/// ensuring that a partial write never corrupts the settings.
pub fn save_config(vault_root: &Path, config: &ExportConfig) -> Result<()> {
    let vaultgraph_dir = get_vaultgraph_dir(vault_root);
    fs::create_dir_all(&vaultgraph_dir).map_err(|e| ExportError::Config {
        message: format!(
            "failed to create vaultgraph directory '{}': {}",
            vaultgraph_dir.display(),
            e
        ),
    })?;

    let config_path = get_config_path(vault_root);
    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| ExportError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| ExportError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| ExportError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
