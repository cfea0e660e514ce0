use cgmath::Point2;

/// Slope of the line through `(x1, y1)` and `(x2, y2)`.
///
/// A zero-width interval has no slope to speak of; it returns 0 so callers
/// fall back to the value at `x1`.
pub fn gradient(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    let run = x2 - x1;
    if run == 0.0 {
        return 0.0;
    }
    (y2 - y1) / run
}

/// Value at `x` on the line leaving `(x1, y1)` with slope `grad`.
pub fn extend(grad: f64, x1: f64, y1: f64, x: f64) -> f64 {
    grad * (x - x1) + y1
}

/// Cubic Bernstein weights for `t` in `[0, 1]`.
pub fn bernstein3(t: f64) -> [f64; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t]
}

/// Evaluate a cubic Bezier segment in the x-z plane.
pub fn cubic_bezier(p: [Point2<f64>; 4], t: f64) -> Point2<f64> {
    let w = bernstein3(t);
    let x = w[0] * p[0].x + w[1] * p[1].x + w[2] * p[2].x + w[3] * p[3].x;
    let y = w[0] * p[0].y + w[1] * p[1].y + w[2] * p[2].y + w[3] * p[3].y;
    Point2::new(x, y)
}
