//! Collision tests for flat 2D shapes
//!
//! Every game uses one of two tests: axis-aligned rectangle overlap
//! (Starship Blaster) or center distance against combined radii
//! (Zombie Rush, Stonewall). Both are strict: shapes that merely touch
//! do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner (screen coords, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Strict bounding-box overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Check whether two circles overlap (center distance < combined radius)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Shortest distance from `point` to the segment `start..end`
///
/// Projects the point onto the segment and clamps to the endpoints, so
/// points beyond either end measure to that endpoint. A zero-length
/// segment degrades to point distance.
pub fn distance_to_segment(point: Vec2, start: Vec2, end: Vec2) -> f32 {
    let line_vec = end - start;
    let len_sq = line_vec.length_squared();
    if len_sq == 0.0 {
        return point.distance(start);
    }

    let t = ((point - start).dot(line_vec) / len_sq).clamp(0.0, 1.0);
    let closest = start + line_vec * t;
    point.distance(closest)
}

/// Whether a circle lies entirely outside the `width` x `height` playfield
pub fn circle_off_screen(center: Vec2, radius: f32, width: f32, height: f32) -> bool {
    center.x < -radius || center.x > width + radius || center.y < -radius || center.y > height + radius
}
