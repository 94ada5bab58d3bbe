//! The enemy road

use glam::Vec2;

use crate::sim::distance_to_segment;

/// Default road from the spawn point (top left) to the castle (right)
pub const PATH_WAYPOINTS: [Vec2; 11] = [
    Vec2::new(50.0, 100.0),
    Vec2::new(200.0, 100.0),
    Vec2::new(200.0, 300.0),
    Vec2::new(400.0, 300.0),
    Vec2::new(400.0, 150.0),
    Vec2::new(600.0, 150.0),
    Vec2::new(600.0, 450.0),
    Vec2::new(350.0, 450.0),
    Vec2::new(350.0, 500.0),
    Vec2::new(750.0, 500.0),
    Vec2::new(750.0, 300.0),
];

/// Shortest distance from `pos` to any segment of the polyline `path`
pub fn distance_to_path(pos: Vec2, path: &[Vec2]) -> f32 {
    match path {
        [] => f32::INFINITY,
        [only] => pos.distance(*only),
        _ => path
            .windows(2)
            .map(|seg| distance_to_segment(pos, seg[0], seg[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Whether `pos` lies strictly within `threshold` of the road
pub fn is_on_path(pos: Vec2, path: &[Vec2], threshold: f32) -> bool {
    distance_to_path(pos, path) < threshold
}
