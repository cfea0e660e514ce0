use crate::utils::math::cubic_bezier;
use cgmath::{Point2, Point3};
use serde::{Deserialize, Serialize};

/// A tree standing on the terrain surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    position: Point3<f64>,
}

impl Tree {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { position: Point3::new(x, y, z) }
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }
}

/// A road following a piecewise cubic Bezier spine in the x-z plane.
///
/// The spine is stored flat as `x0, z0, x1, z1, ...`. Segment `i` uses control
/// points `3i ..= 3i + 3`, so consecutive segments share an end point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    width: f64,
    spine: Vec<f64>,
}

impl Road {
    pub fn new(width: f64, spine: Vec<f64>) -> Self {
        Self { width, spine }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn spine(&self) -> &[f64] {
        &self.spine
    }

    pub fn control_point_count(&self) -> usize {
        self.spine.len() / 2
    }

    pub fn control_point(&self, i: usize) -> Option<Point2<f64>> {
        let x = *self.spine.get(2 * i)?;
        let z = *self.spine.get(2 * i + 1)?;
        Some(Point2::new(x, z))
    }

    /// Number of complete Bezier segments.
    pub fn size(&self) -> usize {
        self.control_point_count().saturating_sub(1) / 3
    }

    /// Point on the spine at parameter `t` in `[0, size]`.
    pub fn point(&self, t: f64) -> Option<Point2<f64>> {
        let segments = self.size();
        if segments == 0 || !t.is_finite() || t < 0.0 || t > segments as f64 {
            return None;
        }

        // t == size lands on the last segment's end
        let segment = (t.floor() as usize).min(segments - 1);
        let local = t - segment as f64;
        let first = segment * 3;
        let p = [
            self.control_point(first)?,
            self.control_point(first + 1)?,
            self.control_point(first + 2)?,
            self.control_point(first + 3)?,
        ];
        Some(cubic_bezier(p, local))
    }
}
