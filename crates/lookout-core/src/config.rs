use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{
    APP_DIR, CONFIG_FILE, DEFAULT_RELOAD_DELAY_SECS, MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR,
    ZOOM_OUT_FACTOR,
};
use crate::error::{LookoutError, Result};

/// Scale bounds and per-tick zoom factors for the screenshot viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

/// Auto-reload behavior after a connection loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReloadConfig {
    pub enabled: bool,
    pub delay_secs: u64,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_secs: DEFAULT_RELOAD_DELAY_SECS,
        }
    }
}

/// Session watch settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Session directory to watch on startup. `None` waits for a manual pick.
    pub root: Option<PathBuf>,
}

/// Top-level application configuration (`lookout.toml`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub reload: ReloadConfig,
    pub viewer: ViewerConfig,
}

impl AppConfig {
    /// Parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| LookoutError::Config(e.to_string()))
    }

    /// Defaults when the file is absent; a log line when it is malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// `lookout.toml` under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }
}
