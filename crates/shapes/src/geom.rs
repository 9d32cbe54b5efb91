//! Shoelace areas and regular-polygon vertices in 2D.
//!
//! Points are plain `Vector2<f64>`. Orientation convention: positive signed
//! area means counter-clockwise.

use nalgebra::Vector2;

/// Signed area of the triangle `(a, b, c)`; positive when counter-clockwise.
///
/// Shoelace form `(x1(y2−y3) + x2(y3−y1) + x3(y1−y2)) / 2`. Collinear input
/// (repeated points included) gives exactly `0.0` whenever the products are
/// exact, which covers integer-valued coordinates.
#[inline]
pub fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)) / 2.0
}

/// Unsigned triangle area; bit-identical under any reordering of the vertices.
///
/// Vertices are sorted lexicographically by `(x, y)` first, so every
/// permutation runs the same float operations in the same order.
pub fn triangle_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let mut v = [a, b, c];
    v.sort_unstable_by(|p, q| p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y)));
    signed_area(v[0], v[1], v[2]).abs()
}

/// Signed area of a closed ring (last vertex connects back to the first).
pub fn polygon_signed_area(ring: &[Vector2<f64>]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..ring.len() {
        let p = ring[k];
        let q = ring[(k + 1) % ring.len()];
        twice += p.x * q.y - q.x * p.y;
    }
    twice / 2.0
}

/// `sides` vertices evenly spaced on the circle, CCW from angle 0.
///
/// Vertex `k` sits at angle `2πk/sides`. Returns an empty list for `sides == 0`.
pub fn regular_polygon(center: Vector2<f64>, radius: f64, sides: u32) -> Vec<Vector2<f64>> {
    if sides == 0 {
        return Vec::new();
    }
    let delta = std::f64::consts::TAU / (sides as f64);
    (0..sides)
        .map(|k| {
            let theta = (k as f64) * delta;
            center + radius * Vector2::new(theta.cos(), theta.sin())
        })
        .collect()
}
