//! Distance, angle and connector-opacity helpers shared by the proximity
//! and pointer-interaction logic.

use glam::Vec2;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Angle in radians of the vector pointing from `from` to `to`.
///
/// Uses `atan2`, so all four quadrants are distinguished. Coincident points
/// yield `0.0`.
pub fn angle_radians(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d == Vec2::ZERO {
        return 0.0;
    }
    d.y.atan2(d.x)
}

/// Opacity of a connector of length `distance`.
///
/// Fully opaque up to `full_opacity_distance`, then fades linearly to zero at
/// `min_distance`. Not clamped: callers keep `full_opacity_distance <
/// min_distance` and only draw connectors shorter than `min_distance`.
pub fn connector_opacity(distance: f32, full_opacity_distance: f32, min_distance: f32) -> f32 {
    if distance <= full_opacity_distance {
        1.0
    } else {
        1.0 - (distance - full_opacity_distance) / (min_distance - full_opacity_distance)
    }
}
