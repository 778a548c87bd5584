//! The drawing capability consumed by shapes and painters.
//!
//! Everything in the scene model draws through [`Rasterizer`]; nothing above
//! this module knows whether the calls end up in a GPU vertex buffer or in a
//! test recorder.

mod record;

pub use record::{RasterCall, RecordingRasterizer};

use crate::coords::{Color, Vec2};

/// Minimal immediate-mode drawing interface.
///
/// Color is sticky: `set_color` affects every following primitive until the
/// next `set_color`.
pub trait Rasterizer {
    /// Sets the fill color for subsequent primitives.
    fn set_color(&mut self, color: Color);

    /// Draws one filled triangle in NDC.
    fn draw_filled_triangle(&mut self, vertices: [Vec2; 3]);

    /// Draws a square point primitive of `diameter_px` logical pixels centered at `center`.
    fn draw_point(&mut self, center: Vec2, diameter_px: f32);

    /// Clears the framebuffer to the current clear color.
    fn clear(&mut self);

    /// Sets the color used by the next `clear`.
    fn set_clear_color(&mut self, color: Color) {
        let _ = color;
    }

    /// `true` once further triangles would be discarded. Long fans stop early.
    fn is_full(&self) -> bool {
        false
    }
}
