//! Shape tessellation for 2D primitives
//!
//! Turns a [`DrawList`] into a flat triangle list in playfield pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::draw::{Color, DrawCmd, DrawList};
use super::vertex::Vertex;

/// Dash and gap length for dashed strokes, in pixels
const DASH_LENGTH: f32 = 5.0;

/// Pick a segment count that keeps circles smooth without wasting triangles
fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 0.5) as u32).clamp(12, 64)
}

/// Tessellate a whole draw list for a `size` pixel surface
pub fn tessellate(list: &DrawList, size: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for cmd in list.commands() {
        match cmd {
            DrawCmd::Clear(color) => rect(&mut vertices, Vec2::ZERO, size, *color),
            DrawCmd::FillRect { pos, size, color } => rect(&mut vertices, *pos, *size, *color),
            DrawCmd::FillCircle {
                center,
                radius,
                color,
            } => circle(&mut vertices, *center, *radius, *color, segments_for_radius(*radius)),
            DrawCmd::StrokeCircle {
                center,
                radius,
                width,
                color,
                dashed,
            } => {
                let inner = radius - width / 2.0;
                let outer = radius + width / 2.0;
                if *dashed {
                    dashed_ring(&mut vertices, *center, inner, outer, *color);
                } else {
                    ring(
                        &mut vertices,
                        *center,
                        (inner, outer),
                        (0.0, TAU),
                        *color,
                        segments_for_radius(*radius),
                    );
                }
            }
            DrawCmd::StrokeArc {
                center,
                radius,
                start,
                end,
                width,
                color,
            } => {
                let span = (end - start).abs();
                let segments = ((segments_for_radius(*radius) as f32 * span / TAU) as u32).max(4);
                ring(
                    &mut vertices,
                    *center,
                    (radius - width / 2.0, radius + width / 2.0),
                    (*start, *end),
                    *color,
                    segments,
                );
            }
            DrawCmd::Line {
                from,
                to,
                width,
                color,
            } => line(&mut vertices, *from, *to, *width, *color),
            DrawCmd::Polyline {
                points,
                width,
                color,
            } => polyline(&mut vertices, points, *width, *color),
            DrawCmd::FillTriangle { a, b, c, color } => {
                vertices.extend([a, b, c].map(|p| Vertex::at(*p, *color)));
            }
        }
    }
    vertices
}

/// Two triangles covering an axis-aligned rectangle
pub fn rect(vertices: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: Color) {
    let c = color.to_array();
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    vertices.push(Vertex::new(x0, y0, c));
    vertices.push(Vertex::new(x1, y0, c));
    vertices.push(Vertex::new(x0, y1, c));

    vertices.push(Vertex::new(x0, y1, c));
    vertices.push(Vertex::new(x1, y0, c));
    vertices.push(Vertex::new(x1, y1, c));
}

/// Filled circle as a triangle fan
pub fn circle(vertices: &mut Vec<Vertex>, center: Vec2, radius: f32, color: Color, segments: u32) {
    let color = color.to_array();
    vertices.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Band between two radii over the angle range `start..end`
pub fn ring(
    vertices: &mut Vec<Vertex>,
    center: Vec2,
    (inner_radius, outer_radius): (f32, f32),
    (start, end): (f32, f32),
    color: Color,
    segments: u32,
) {
    let color = color.to_array();
    let span = end - start;
    vertices.reserve((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = start + (i as f32 / segments as f32) * span;
        let theta2 = start + ((i + 1) as f32 / segments as f32) * span;

        let inner1 = center + Vec2::new(theta1.cos(), theta1.sin()) * inner_radius;
        let outer1 = center + Vec2::new(theta1.cos(), theta1.sin()) * outer_radius;
        let inner2 = center + Vec2::new(theta2.cos(), theta2.sin()) * inner_radius;
        let outer2 = center + Vec2::new(theta2.cos(), theta2.sin()) * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }
}

/// Ring drawn as alternating dashes and gaps of [`DASH_LENGTH`] pixels
pub fn dashed_ring(vertices: &mut Vec<Vertex>, center: Vec2, inner: f32, outer: f32, color: Color) {
    let radius = (inner + outer) / 2.0;
    if radius <= 0.0 {
        return;
    }
    let dash_angle = DASH_LENGTH / radius;
    let dashes = ((TAU / (2.0 * dash_angle)).floor() as u32).max(1);

    for i in 0..dashes {
        let start = i as f32 * 2.0 * dash_angle;
        ring(vertices, center, (inner, outer), (start, start + dash_angle), color, 2);
    }
}

/// Thick straight segment as a quad
pub fn line(vertices: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: Color) {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return;
    }
    let c = color.to_array();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let d = to + perp;
    let e = to - perp;

    vertices.push(Vertex::new(a.x, a.y, c));
    vertices.push(Vertex::new(b.x, b.y, c));
    vertices.push(Vertex::new(d.x, d.y, c));

    vertices.push(Vertex::new(d.x, d.y, c));
    vertices.push(Vertex::new(b.x, b.y, c));
    vertices.push(Vertex::new(e.x, e.y, c));
}

/// Line strip with round joins and caps (a disc at every point)
pub fn polyline(vertices: &mut Vec<Vertex>, points: &[Vec2], width: f32, color: Color) {
    let radius = width / 2.0;
    for pair in points.windows(2) {
        line(vertices, pair[0], pair[1], width, color);
    }
    for p in points {
        circle(vertices, *p, radius, color, segments_for_radius(radius));
    }
}
