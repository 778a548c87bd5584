use crate::coords::{Color, Vec2};
use crate::raster::Rasterizer;
use crate::scene::{Scene, Shape};

/// Single point primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub position: Vec2,
    pub color: Color,
    /// Rasterized diameter in logical pixels.
    pub size: f32,
}

impl Point {
    #[inline]
    pub fn new(position: Vec2, color: Color, size: f32) -> Self {
        Self { position, color, size }
    }

    pub fn render(&self, raster: &mut dyn Rasterizer) {
        raster.set_color(self.color);
        raster.draw_point(self.position, self.size);
    }
}

impl Scene {
    /// Appends a point.
    #[inline]
    pub fn push_point(&mut self, position: Vec2, color: Color, size: f32) {
        self.push(Shape::Point(Point::new(position, color, size)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{RasterCall, RecordingRasterizer};

    #[test]
    fn renders_one_point_at_position() {
        let p = Point::new(Vec2::new(0.5, -0.5), Color::GREEN, 10.0);
        let mut r = RecordingRasterizer::new();
        p.render(&mut r);

        assert_eq!(
            r.calls(),
            &[
                RasterCall::SetColor(Color::GREEN),
                RasterCall::Point { center: Vec2::new(0.5, -0.5), diameter_px: 10.0 },
            ]
        );
    }
}
