// terrain-field: heightmap terrain with trees and roads
// Bilinear altitude sampling and triangle mesh emission

pub mod utils;
pub mod config;

pub mod rendering;
pub mod world;

// Re-export commonly used types for convenience
pub use config::{TerrainSettings, MeshSettings, LoggingSettings, load_settings, save_settings};
pub use rendering::{NormalMode, RenderSurface, TerrainMesh, TerrainVertex, DirectionalLight};
pub use world::{Dimension, Terrain, TerrainError, TerrainResult, Tree, Road, Triangle};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
