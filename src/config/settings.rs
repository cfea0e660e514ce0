use crate::rendering::NormalMode;
use std::fs;
use std::path::PathBuf;
use directories::ProjectDirs;
use serde::{Serialize, Deserialize};
use thiserror::Error;

const CONFIG_FILE: &str = "terrain.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// =============================================================================
// Terrain Configuration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSettings {
    pub normal_mode: NormalMode,
    pub parallel_rows: bool, // Build rows on the rayon pool
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            normal_mode: NormalMode::default(),
            parallel_rows: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub mesh: MeshSettings,
    pub logging: LoggingSettings,
}

impl TerrainSettings {
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(data)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "terrain-field", "terrain-field")
        .map(|proj| proj.config_dir().join(CONFIG_FILE))
}

pub fn save_settings(settings: &TerrainSettings) -> Result<(), ConfigError> {
    if let Some(path) = settings_path() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, settings.to_toml_string()?)?;
        tracing::debug!("Saved terrain settings to {}", path.display());
    }
    Ok(())
}

pub fn load_settings() -> Option<TerrainSettings> {
    let path = settings_path()?;
    let data = fs::read_to_string(&path).ok()?;
    match TerrainSettings::from_toml_str(&data) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!("Ignoring unreadable settings at {}: {}", path.display(), e);
            None
        }
    }
}
