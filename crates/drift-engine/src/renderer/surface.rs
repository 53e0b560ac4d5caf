//! Drawing contract between the field and its host.
//!
//! The field only needs three primitives: clear a region, fill a circle and
//! stroke a line. The web bridge implements this over `CanvasRenderingContext2d`;
//! [`DrawList`](super::draw_list::DrawList) records the same calls into flat
//! buffers for headless use and GPU front ends.

use glam::Vec2;

use crate::components::color::Rgba;

pub trait Surface {
    /// Whether the surface can be drawn on right now (e.g. the canvas is
    /// attached). The field skips the whole frame when this is false.
    fn is_ready(&self) -> bool {
        true
    }

    /// Clear the rectangle `(0, 0) .. (width, height)`.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Match the backing store to a new viewport. Recording surfaces ignore it.
    fn resize(&mut self, _width: f32, _height: f32) {}
}
