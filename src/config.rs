use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PaintError, Result};
use crate::style::PaintState;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "STAMP_PAINT_CONFIG";

/// Startup configuration.
///
/// Every field is optional in the JSON file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Toolbox state on first launch (later launches restore the saved state)
    pub initial: PaintState,
    /// Directory exports are written into; empty means the working directory
    pub export_dir: PathBuf,
    /// File name of exports, without extension
    pub export_name: String,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            initial: PaintState::default(),
            export_dir: PathBuf::new(),
            export_name: "painting".to_owned(),
        }
    }
}

impl PaintConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        let size = config.initial.style.brush_size;
        config.initial.style.set_brush_size(size);
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| PaintError::ConfigRead {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from [`CONFIG_ENV_VAR`] if it is set, falling back to defaults.
    ///
    /// A broken config file is logged and ignored rather than aborting startup.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        let path = PathBuf::from(path);
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::error!("{}; using defaults", err);
                Self::default()
            }
        }
    }
}
