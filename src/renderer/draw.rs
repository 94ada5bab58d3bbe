//! Immediate-mode draw list
//!
//! A render pass pushes shape commands in back-to-front order. The list is
//! plain data, so game render passes can be inspected in tests without a
//! GPU; [`super::shapes`] turns it into triangles for the pipeline.

use glam::Vec2;

/// Linear RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const BLACK: Color = Color::hex(0x000000);

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as f32 / 255.0,
            g: ((rgb >> 8) & 0xff) as f32 / 255.0,
            b: (rgb & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// One shape primitive, in playfield pixels (y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface
    Clear(Color),
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Color,
        dashed: bool,
    },
    /// Stroke part of a circle from `start` to `end` (radians, clockwise on screen)
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Connected line strip with round joins and caps
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    FillTriangle {
        a: Vec2,
        b: Vec2,
        c: Vec2,
        color: Color,
    },
}

/// Ordered list of draw commands for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear(color));
    }

    pub fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.cmds.push(DrawCmd::FillRect { pos, size, color });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
            dashed: false,
        });
    }

    pub fn dashed_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
            dashed: true,
        });
    }

    pub fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        (start, end): (f32, f32),
        width: f32,
        color: Color,
    ) {
        self.cmds.push(DrawCmd::StrokeArc {
            center,
            radius,
            start,
            end,
            width,
            color,
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn polyline(&mut self, points: Vec<Vec2>, width: f32, color: Color) {
        self.cmds.push(DrawCmd::Polyline {
            points,
            width,
            color,
        });
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.cmds.push(DrawCmd::FillTriangle { a, b, c, color });
    }

    /// Translucent full-surface veil (game-over overlay)
    pub fn veil(&mut self, size: Vec2, color: Color) {
        self.fill_rect(Vec2::ZERO, size, color);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}
