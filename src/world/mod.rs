//! Terrain world model
//!
//! A heightmap grid with trees and roads placed on it, and the triangles the
//! grid is drawn with.

pub mod objects;
pub mod scene;
pub mod terrain;
pub mod triangle;

// Re-export main types for convenience
pub use objects::{Road, Tree};
pub use scene::{SceneDocument, SceneError, load_scene, save_scene};
pub use terrain::{Dimension, Terrain};
pub use triangle::Triangle;

// Error types
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("Terrain dimensions must be positive, got {width}x{depth}")]
    InvalidDimensions { width: usize, depth: usize },

    #[error("Grid index ({x}, {z}) outside {width}x{depth} terrain")]
    GridIndexOutOfRange { x: usize, z: usize, width: usize, depth: usize },

    #[error("Point ({x}, {z}) outside {width}x{depth} terrain")]
    OutOfBounds { x: f64, z: f64, width: usize, depth: usize },
}

pub type TerrainResult<T> = Result<T, TerrainError>;
