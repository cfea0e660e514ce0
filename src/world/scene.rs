use super::{Road, Terrain, TerrainError, Tree};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to access scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed scene document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scene has {found} altitudes, expected {expected}")]
    AltitudeCount { expected: usize, found: usize },
    #[error("Invalid terrain in scene: {0}")]
    Terrain(#[from] TerrainError),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub x: f64,
    pub z: f64,
    /// Stored height. Without it the tree is planted on the surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

/// On-disk scene layout.
///
/// Altitudes are one flat list in z-major order: `altitude[z * width + x]`.
/// Trees are saved with their full position and restored as is, even when a
/// later resize left them off the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub width: usize,
    pub depth: usize,
    #[serde(default)]
    pub sunlight: [f32; 3],
    pub altitude: Vec<f64>,
    #[serde(default)]
    pub trees: Vec<TreeRecord>,
    #[serde(default)]
    pub roads: Vec<Road>,
}

impl SceneDocument {
    pub fn from_terrain(terrain: &Terrain) -> Self {
        let (width, depth) = (terrain.width(), terrain.depth());
        let grid = terrain.altitudes();
        let mut altitude = Vec::with_capacity(grid.len());
        for z in 0..depth {
            for x in 0..width {
                altitude.push(grid[x * depth + z]);
            }
        }

        Self {
            width,
            depth,
            sunlight: terrain.sunlight(),
            altitude,
            trees: terrain
                .trees()
                .iter()
                .map(|tree| {
                    let p = tree.position();
                    TreeRecord { x: p.x, z: p.z, y: Some(p.y) }
                })
                .collect(),
            roads: terrain.roads().to_vec(),
        }
    }

    pub fn into_terrain(self) -> Result<Terrain, SceneError> {
        // Checked before allocating the grid
        let expected = Terrain::check_dimensions(self.width, self.depth)?;
        if self.altitude.len() != expected {
            return Err(SceneError::AltitudeCount { expected, found: self.altitude.len() });
        }
        let mut terrain = Terrain::new(self.width, self.depth)?;

        for (i, h) in self.altitude.into_iter().enumerate() {
            terrain.set_grid_altitude(i % self.width, i / self.width, h)?;
        }

        let [dx, dy, dz] = self.sunlight;
        terrain.set_sunlight_dir(dx, dy, dz);

        for tree in self.trees {
            match tree.y {
                Some(y) => terrain.push_tree(Tree::new(tree.x, y, tree.z)),
                None => terrain.add_tree(tree.x, tree.z)?,
            }
        }
        for road in self.roads {
            terrain.add_road(road.width(), road.spine().to_vec());
        }
        Ok(terrain)
    }

    pub fn from_json_str(data: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json_string(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub fn load_scene(path: impl AsRef<Path>) -> Result<Terrain, SceneError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let terrain = SceneDocument::from_json_str(&data)?.into_terrain()?;
    info!(
        "Loaded {}x{} terrain with {} trees and {} roads from {}",
        terrain.width(),
        terrain.depth(),
        terrain.trees().len(),
        terrain.roads().len(),
        path.display()
    );
    Ok(terrain)
}

pub fn save_scene(path: impl AsRef<Path>, terrain: &Terrain) -> Result<(), SceneError> {
    let path = path.as_ref();
    let json = SceneDocument::from_terrain(terrain).to_json_string()?;
    fs::write(path, json)?;
    info!("Saved terrain scene to {}", path.display());
    Ok(())
}
