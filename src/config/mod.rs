pub mod settings;

// Re-export commonly used types
pub use settings::{
    TerrainSettings, MeshSettings, LoggingSettings, ConfigError,
    save_settings, load_settings, settings_path,
};
