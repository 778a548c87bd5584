use crate::coords::{Color, Vec2};

use super::Rasterizer;

/// One call made against a [`RecordingRasterizer`].
#[derive(Debug, Clone, PartialEq)]
pub enum RasterCall {
    SetColor(Color),
    SetClearColor(Color),
    Clear,
    Triangle([Vec2; 3]),
    Point { center: Vec2, diameter_px: f32 },
}

/// Rasterizer that records calls instead of drawing.
///
/// Used to observe exactly what a shape, scene, or painter emits.
#[derive(Debug, Default, Clone)]
pub struct RecordingRasterizer {
    calls: Vec<RasterCall>,
}

impl RecordingRasterizer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn calls(&self) -> &[RasterCall] {
        &self.calls
    }

    pub fn triangle_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, RasterCall::Triangle(_))).count()
    }

    pub fn point_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, RasterCall::Point { .. })).count()
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, RasterCall::Clear)).count()
    }

    /// Primitive draws (triangles and points), excluding state changes and clears.
    pub fn draw_count(&self) -> usize {
        self.triangle_count() + self.point_count()
    }

    /// Triangles in call order, each paired with the color active when it was drawn.
    pub fn colored_triangles(&self) -> Vec<(Color, [Vec2; 3])> {
        let mut color = Color::default();
        let mut out = Vec::new();
        for call in &self.calls {
            match call {
                RasterCall::SetColor(c) => color = *c,
                RasterCall::Triangle(v) => out.push((color, *v)),
                _ => {}
            }
        }
        out
    }
}

impl Rasterizer for RecordingRasterizer {
    fn set_color(&mut self, color: Color) {
        self.calls.push(RasterCall::SetColor(color));
    }

    fn draw_filled_triangle(&mut self, vertices: [Vec2; 3]) {
        self.calls.push(RasterCall::Triangle(vertices));
    }

    fn draw_point(&mut self, center: Vec2, diameter_px: f32) {
        self.calls.push(RasterCall::Point { center, diameter_px });
    }

    fn clear(&mut self) {
        self.calls.push(RasterCall::Clear);
    }

    fn set_clear_color(&mut self, color: Color) {
        self.calls.push(RasterCall::SetClearColor(color));
    }
}
