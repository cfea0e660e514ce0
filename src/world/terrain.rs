use super::{Road, TerrainError, TerrainResult, Tree, Triangle};
use crate::rendering::{NormalMode, RenderSurface};
use crate::utils::math::{extend, gradient};
use cgmath::Vector3;
use tracing::debug;

/// Grid size in vertices along x (`width`) and z (`depth`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    pub width: usize,
    pub depth: usize,
}

impl Dimension {
    pub fn new(width: usize, depth: usize) -> Self {
        Self { width, depth }
    }
}

/// Heightmap terrain.
///
/// Altitudes live in one flat buffer indexed `x * depth + z`. Trees and roads
/// are only ever appended. The sunlight is a direction, not a position.
#[derive(Debug, Clone, PartialEq)]
pub struct Terrain {
    size: Dimension,
    altitude: Vec<f64>,
    trees: Vec<Tree>,
    roads: Vec<Road>,
    sunlight: [f32; 3],
}

impl Terrain {
    /// Create a flat terrain of `width` x `depth` grid vertices.
    pub fn new(width: usize, depth: usize) -> TerrainResult<Self> {
        let len = Self::check_dimensions(width, depth)?;
        Ok(Self {
            size: Dimension::new(width, depth),
            altitude: vec![0.0; len],
            trees: Vec::new(),
            roads: Vec::new(),
            sunlight: [0.0; 3],
        })
    }

    pub fn from_size(size: Dimension) -> TerrainResult<Self> {
        Self::new(size.width, size.depth)
    }

    /// Number of grid vertices for a `width` x `depth` terrain.
    pub fn check_dimensions(width: usize, depth: usize) -> TerrainResult<usize> {
        match width.checked_mul(depth) {
            Some(len) if len > 0 => Ok(len),
            _ => Err(TerrainError::InvalidDimensions { width, depth }),
        }
    }

    pub fn size(&self) -> Dimension {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn depth(&self) -> usize {
        self.size.depth
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn sunlight(&self) -> [f32; 3] {
        self.sunlight
    }

    pub fn set_sunlight_dir(&mut self, dx: f32, dy: f32, dz: f32) {
        self.sunlight = [dx, dy, dz];
    }

    /// Resize the grid, keeping altitudes where old and new grids overlap.
    pub fn set_size(&mut self, width: usize, depth: usize) -> TerrainResult<()> {
        let len = Self::check_dimensions(width, depth)?;

        let old = self.size;
        let mut altitude = vec![0.0; len];
        for x in 0..width.min(old.width) {
            for z in 0..depth.min(old.depth) {
                altitude[x * depth + z] = self.altitude[x * old.depth + z];
            }
        }

        debug!(
            "Resized terrain from {}x{} to {}x{}",
            old.width, old.depth, width, depth
        );
        self.size = Dimension::new(width, depth);
        self.altitude = altitude;
        Ok(())
    }

    fn index(&self, x: usize, z: usize) -> TerrainResult<usize> {
        let Dimension { width, depth } = self.size;
        if x >= width || z >= depth {
            return Err(TerrainError::GridIndexOutOfRange { x, z, width, depth });
        }
        Ok(x * depth + z)
    }

    pub fn grid_altitude(&self, x: usize, z: usize) -> TerrainResult<f64> {
        Ok(self.altitude[self.index(x, z)?])
    }

    pub fn set_grid_altitude(&mut self, x: usize, z: usize, h: f64) -> TerrainResult<()> {
        let i = self.index(x, z)?;
        self.altitude[i] = h;
        Ok(())
    }

    /// Altitude at an arbitrary point, interpolated from the enclosing cell.
    ///
    /// ```text
    ///  +------>  x
    ///  |   (x1,z1) top  (x2,z1)
    ///  |   (x1,z2) bottom (x2,z2)
    ///  v
    ///  z
    /// ```
    ///
    /// Each of the top and bottom edges is interpolated at `x`, then the two
    /// results are interpolated at `z`. On a grid line the corresponding
    /// interval has zero width and the corner value is used as is.
    pub fn altitude(&self, x: f64, z: f64) -> TerrainResult<f64> {
        let Dimension { width, depth } = self.size;
        let in_range = |v: f64, n: usize| v.is_finite() && v >= 0.0 && v <= (n - 1) as f64;
        if !in_range(x, width) || !in_range(z, depth) {
            return Err(TerrainError::OutOfBounds { x, z, width, depth });
        }

        let x1 = x.floor();
        let x2 = x.ceil();
        let z1 = z.floor();
        let z2 = z.ceil();

        let bottom_left = self.grid_altitude(x1 as usize, z2 as usize)?;
        let bottom_right = self.grid_altitude(x2 as usize, z2 as usize)?;
        let top_left = self.grid_altitude(x1 as usize, z1 as usize)?;
        let top_right = self.grid_altitude(x2 as usize, z1 as usize)?;

        let bottom_grad = gradient(x1, x2, bottom_left, bottom_right);
        let top_grad = gradient(x1, x2, top_left, top_right);
        let interp_bottom = extend(bottom_grad, x1, bottom_left, x);
        let interp_top = extend(top_grad, x1, top_left, x);

        let z_grad = gradient(z1, z2, interp_top, interp_bottom);
        Ok(extend(z_grad, z1, interp_top, z))
    }

    /// Plant a tree at `(x, z)`, standing on the surface.
    pub fn add_tree(&mut self, x: f64, z: f64) -> TerrainResult<()> {
        let y = self.altitude(x, z)?;
        self.trees.push(Tree::new(x, y, z));
        Ok(())
    }

    pub fn add_road(&mut self, width: f64, spine: Vec<f64>) {
        self.roads.push(Road::new(width, spine));
    }

    /// Altitudes in storage order, `x * depth + z`.
    pub fn altitudes(&self) -> &[f64] {
        &self.altitude
    }

    pub(crate) fn push_tree(&mut self, tree: Tree) {
        self.trees.push(tree);
    }

    // Callers keep x < width and z < depth
    fn vertex(&self, x: usize, z: usize) -> (f64, f64, f64) {
        (x as f64, self.altitude[x * self.size.depth + z], z as f64)
    }

    fn check_cell(&self, x: usize, z: usize) -> TerrainResult<()> {
        let Dimension { width, depth } = self.size;
        if x >= width - 1 || z >= depth - 1 {
            return Err(TerrainError::GridIndexOutOfRange { x, z, width, depth });
        }
        Ok(())
    }

    /// The two faces of cell `(x, z)`.
    ///
    /// ```text
    /// (x,z)   +-----+ (x+1,z)
    ///         | L  /|
    ///         |  /  |
    ///         |/  R |
    /// (x,z+1) +-----+ (x+1,z+1)
    /// ```
    ///
    /// Left is `(x,z), (x,z+1), (x+1,z)`; right is `(x,z+1), (x+1,z+1),
    /// (x+1,z)`. Both wind so their normals point up.
    pub fn cell_triangles(&self, x: usize, z: usize) -> TerrainResult<[Triangle; 2]> {
        self.check_cell(x, z)?;
        Ok(self.cell_faces(x, z))
    }

    fn cell_faces(&self, x: usize, z: usize) -> [Triangle; 2] {
        let a = self.vertex(x, z);
        let b = self.vertex(x, z + 1);
        let c = self.vertex(x + 1, z);
        let d = self.vertex(x + 1, z + 1);

        let left = Triangle::from_coords([a.0, b.0, c.0], [a.1, b.1, c.1], [a.2, b.2, c.2]);
        let right = Triangle::from_coords([b.0, d.0, c.0], [b.1, d.1, c.1], [b.2, d.2, c.2]);
        [left, right]
    }

    /// Faces of grid column `x`, in the order they are drawn.
    pub fn row_triangles(&self, x: usize) -> TerrainResult<Vec<Triangle>> {
        let cells = self.depth() - 1;
        if cells > 0 {
            self.check_cell(x, 0)?;
        }
        let mut triangles = Vec::with_capacity(cells * 2);
        for z in 0..cells {
            triangles.extend(self.cell_faces(x, z));
        }
        Ok(triangles)
    }

    /// Every face of the grid, in the order they are drawn.
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut triangles = Vec::with_capacity(self.triangle_count());
        for x in 0..self.width() - 1 {
            for z in 0..self.depth() - 1 {
                triangles.extend(self.cell_faces(x, z));
            }
        }
        triangles
    }

    pub fn triangle_count(&self) -> usize {
        2 * (self.width() - 1) * (self.depth() - 1)
    }

    /// Raw Newell normal of `triangle`.
    pub fn calculate_surface_normal(&self, triangle: &Triangle) -> Vector3<f64> {
        triangle.newell_normal()
    }

    /// Emit the terrain mesh to `surface`, one primitive per face.
    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, mode: NormalMode) {
        for triangle in self.triangles() {
            emit_triangle(surface, &triangle, mode);
        }
    }
}

/// Submit one face: begin, normal, three vertices in stored winding, end.
pub(crate) fn emit_triangle<S: RenderSurface + ?Sized>(
    surface: &mut S,
    triangle: &Triangle,
    mode: NormalMode,
) {
    surface.begin_triangles();
    surface.normal(mode.apply(triangle));
    for vertex in triangle.vertices() {
        surface.vertex(*vertex);
    }
    surface.end();
}
