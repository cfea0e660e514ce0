use super::{NormalMode, RenderSurface};
use crate::config::MeshSettings;
use crate::world::terrain::emit_triangle;
use crate::world::{Terrain, TerrainResult};
use bytemuck::{Pod, Zeroable};
use cgmath::{Point3, Vector3};
use rayon::prelude::*;
use tracing::{debug, warn};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Render surface that keeps what it is given as a flat triangle list.
///
/// Every vertex carries the normal of the primitive it was submitted in.
#[derive(Debug, Default, Clone)]
pub struct TerrainMesh {
    vertices: Vec<TerrainVertex>,
    normal: [f32; 3],
    primitive_start: Option<usize>,
}

impl TerrainMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the full terrain mesh.
    ///
    /// With `parallel` set, columns are built on the rayon pool and then
    /// submitted in column order, so the result matches a sequential draw.
    pub fn build(terrain: &Terrain, mode: NormalMode, parallel: bool) -> TerrainResult<Self> {
        let mut mesh = Self::with_capacity(terrain.triangle_count());
        let columns = terrain.width() - 1;

        if parallel {
            let rows = (0..columns)
                .into_par_iter()
                .map(|x| terrain.row_triangles(x))
                .collect::<TerrainResult<Vec<_>>>()?;
            for triangle in rows.iter().flatten() {
                emit_triangle(&mut mesh, triangle, mode);
            }
        } else {
            terrain.draw(&mut mesh, mode);
        }

        debug!(
            "Built terrain mesh: {} triangles, {} bytes (parallel: {})",
            mesh.triangle_count(),
            mesh.as_bytes().len(),
            parallel
        );
        Ok(mesh)
    }

    pub fn from_settings(terrain: &Terrain, settings: &MeshSettings) -> TerrainResult<Self> {
        Self::build(terrain, settings.normal_mode, settings.parallel_rows)
    }

    fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
            ..Self::default()
        }
    }

    pub fn vertices(&self) -> &[TerrainVertex] {
        &self.vertices
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl RenderSurface for TerrainMesh {
    fn begin_triangles(&mut self) {
        if self.primitive_start.is_some() {
            warn!("begin_triangles called inside an open primitive");
        }
        self.primitive_start = Some(self.vertices.len());
    }

    fn normal(&mut self, normal: Vector3<f64>) {
        self.normal = [normal.x as f32, normal.y as f32, normal.z as f32];
    }

    fn vertex(&mut self, position: Point3<f64>) {
        if self.primitive_start.is_none() {
            warn!("Vertex submitted outside a primitive, dropping it");
            return;
        }
        let position = [position.x as f32, position.y as f32, position.z as f32];
        self.vertices.push(TerrainVertex { position, normal: self.normal });
    }

    fn end(&mut self) {
        let Some(start) = self.primitive_start.take() else {
            warn!("end called without begin_triangles");
            return;
        };
        let submitted = self.vertices.len() - start;
        if submitted % 3 != 0 {
            warn!("Dropping {} vertices of an incomplete triangle", submitted % 3);
            self.vertices.truncate(self.vertices.len() - submitted % 3);
        }
    }
}
