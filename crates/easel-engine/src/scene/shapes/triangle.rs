use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;
use crate::scene::{Scene, Shape};

/// Right isosceles triangle anchored at its corner.
///
/// Vertices are `position`, `position + (size, 0)` and `position + (0, size)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub position: Vec2,
    pub color: Color,
    /// Leg length in NDC units.
    pub size: f32,
}

impl Triangle {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    #[inline]
    pub fn vertices(&self) -> [Vec2; 3] {
        let Vec2 { x, y } = self.position;
        let d = self.size;
        [Vec2::new(x, y), Vec2::new(x + d, y), Vec2::new(x, y + d)]
    }

    pub fn render(&self, raster: &mut dyn Rasterizer) {
        raster.set_color(self.color);
        raster.draw_filled_triangle(self.vertices());
    }
}

impl Scene {
    /// Appends a triangle.
    #[inline]
    pub fn push_triangle(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Triangle(Triangle::new(position, color, size)));
    }
}
