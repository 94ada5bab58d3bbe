//! Movement helpers shared by player controllers and chasing enemies

use glam::Vec2;

/// Movement direction from four directional inputs
///
/// Opposing inputs cancel. The result is either zero or unit length, so a
/// diagonal move covers the same distance per tick as an axial one.
pub fn direction_from_axes(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if up {
        dir.y -= 1.0;
    }
    if down {
        dir.y += 1.0;
    }
    if left {
        dir.x -= 1.0;
    }
    if right {
        dir.x += 1.0;
    }
    dir.normalize_or_zero()
}

/// Advance `pos` toward `target` by exactly `speed`
///
/// Always steps the full speed along the normalized direction, so it may
/// overshoot a close target. A position already on the target does not move.
pub fn step_toward(pos: Vec2, target: Vec2, speed: f32) -> Vec2 {
    pos + (target - pos).normalize_or_zero() * speed
}

/// Clamp a point into the inclusive box `min..=max`
#[inline]
pub fn clamp_to_bounds(pos: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    pos.clamp(min, max)
}

/// Angle (radians, screen coords) of the vector from `from` to `to`
#[inline]
pub fn facing_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Unit vector for an angle
#[inline]
pub fn angle_to_dir(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
