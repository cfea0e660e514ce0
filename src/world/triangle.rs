use cgmath::{InnerSpace, Point3, Vector3, Zero};

/// Three vertices of one terrain face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point3<f64>; 3],
}

impl Triangle {
    const NUM_VERTICES: usize = 3;

    pub fn new(vertices: [Point3<f64>; 3]) -> Self {
        Self { vertices }
    }

    /// Build from per-axis coordinate lists, one entry per vertex.
    pub fn from_coords(xs: [f64; 3], ys: [f64; 3], zs: [f64; 3]) -> Self {
        Self::new([
            Point3::new(xs[0], ys[0], zs[0]),
            Point3::new(xs[1], ys[1], zs[1]),
            Point3::new(xs[2], ys[2], zs[2]),
        ])
    }

    pub fn vertices(&self) -> &[Point3<f64>; 3] {
        &self.vertices
    }

    pub fn num_vertices(&self) -> usize {
        Self::NUM_VERTICES
    }

    /// Newell's method over the closed vertex cycle.
    ///
    /// The result is not normalized; its direction follows the winding order
    /// and its length is twice the triangle's area.
    pub fn newell_normal(&self) -> Vector3<f64> {
        let mut normal = Vector3::zero();
        for i in 0..Self::NUM_VERTICES {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % Self::NUM_VERTICES];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal
    }

    /// Unit-length normal, or the zero vector for a degenerate triangle.
    pub fn unit_normal(&self) -> Vector3<f64> {
        let normal = self.newell_normal();
        let length = normal.magnitude();
        if length == 0.0 {
            return normal;
        }
        normal / length
    }

    pub fn area(&self) -> f64 {
        self.newell_normal().magnitude() * 0.5
    }
}
