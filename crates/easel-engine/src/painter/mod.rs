//! Procedural painters: fixed compositions drawn straight to a rasterizer.
//!
//! A painter never reads or writes a [`Scene`](crate::scene::Scene); it only
//! needs the same [`Rasterizer`] capability the shapes use, so painters can be
//! swapped or tested in isolation.

mod landscape;

pub use landscape::Landscape;

use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;

/// Something that can draw a complete picture in one call.
pub trait Painter {
    fn paint(&self, raster: &mut dyn Rasterizer);
}

/// Axis-aligned rectangle from its bottom-left corner, as two triangles.
pub fn fill_rect(raster: &mut dyn Rasterizer, origin: Vec2, width: f32, height: f32, color: Color) {
    let Vec2 { x, y } = origin;
    raster.set_color(color);
    raster.draw_filled_triangle([
        Vec2::new(x, y),
        Vec2::new(x + width, y),
        Vec2::new(x, y + height),
    ]);
    raster.draw_filled_triangle([
        Vec2::new(x + width, y + height),
        Vec2::new(x, y + height),
        Vec2::new(x + width, y),
    ]);
}
