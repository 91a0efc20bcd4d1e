//! Configuration loading from file system

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use super::defaults::DEFAULT_CONFIG_PATH;
use super::types::RenderConfig;
use crate::error::{RenderKitError, Result, ResultExt};

/// Load configuration from ~/.ui-render/config.json
///
/// Returns RenderConfig::default() when the file is missing or malformed;
/// a malformed file is logged first.
#[instrument(name = "load_config")]
pub fn load_config() -> RenderConfig {
    let config_path = PathBuf::from(shellexpand::tilde(DEFAULT_CONFIG_PATH).as_ref());

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
        return RenderConfig::default();
    }

    load_config_from(&config_path)
        .warn_on_err()
        .unwrap_or_default()
}

/// Load configuration from an explicit path, surfacing read and parse errors.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<RenderConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| RenderKitError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: RenderConfig = serde_json::from_str(&json)?;
    info!(path = %path.display(), policy = ?config.contract_policy, "Successfully loaded config");
    Ok(config)
}
