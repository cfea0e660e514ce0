pub mod light;
pub mod mesh;

use crate::world::Triangle;
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

// Re-export the mesh collector as the main interface
pub use light::{DirectionalLight, LightUniform};
pub use mesh::{TerrainMesh, TerrainVertex};

/// Immediate-mode rendering backend.
///
/// A primitive is submitted as `begin_triangles`, one `normal`, three
/// `vertex` calls and `end`, in that order.
pub trait RenderSurface {
    fn begin_triangles(&mut self);
    fn normal(&mut self, normal: Vector3<f64>);
    fn vertex(&mut self, position: Point3<f64>);
    fn end(&mut self);
}

/// How face normals are handed to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalMode {
    /// Unit length, ready for lighting.
    #[default]
    Unit,
    /// Raw Newell vector, length twice the face area.
    Newell,
}

impl NormalMode {
    pub fn apply(self, triangle: &Triangle) -> Vector3<f64> {
        match self {
            NormalMode::Unit => triangle.unit_normal(),
            NormalMode::Newell => triangle.newell_normal(),
        }
    }
}
