use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::surface::Surface;
use crate::components::color::Rgba;

/// Per-circle render data. 7 floats = 28 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl CircleInstance {
    pub const FLOATS: usize = 7;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Per-line render data. 9 floats = 36 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl LineInstance {
    pub const FLOATS: usize = 9;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn start(&self) -> Vec2 {
        Vec2::new(self.x0, self.y0)
    }

    pub fn end(&self) -> Vec2 {
        Vec2::new(self.x1, self.y1)
    }
}

/// A recording [`Surface`]: every draw call becomes a plain-old-data instance.
///
/// `clear` empties both buffers, so after a frame the list holds exactly that
/// frame's lines and circles, in draw order.
#[derive(Debug)]
pub struct DrawList {
    pub circles: Vec<CircleInstance>,
    pub lines: Vec<LineInstance>,
    /// Size passed to the last `clear`.
    pub cleared: Option<(f32, f32)>,
    /// Reported by `is_ready`; flip to false to simulate a detached canvas.
    pub ready: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            circles: Vec::with_capacity(256),
            lines: Vec::with_capacity(1024),
            cleared: None,
            ready: true,
        }
    }

    /// Circle data as a flat float slice (`CircleInstance::FLOATS` per circle).
    pub fn circle_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.circles)
    }

    /// Line data as a flat float slice (`LineInstance::FLOATS` per line).
    pub fn line_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lines)
    }

    pub fn circle_count(&self) -> u32 {
        self.circles.len() as u32
    }

    pub fn line_count(&self) -> u32 {
        self.lines.len() as u32
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.circles.clear();
        self.lines.clear();
        self.cleared = Some((width, height));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(CircleInstance {
            x: center.x,
            y: center.y,
            radius,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.lines.push(LineInstance {
            x0: from.x,
            y0: from.y,
            x1: to.x,
            y1: to.y,
            width,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        });
    }
}
