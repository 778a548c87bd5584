use std::time::Instant;

use crate::raster::Rasterizer;
use crate::time::RenderStats;

use super::Shape;

/// Ordered list of shapes.
///
/// Insertion order is paint order is save order. There is no identity beyond
/// index and no deduplication; identical shapes simply layer.
///
/// Shapes are never edited in place: the only mutations are `push`, `extend`
/// and `clear`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a shape at the end (topmost).
    #[inline]
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Removes every shape. Keeps allocated capacity; idempotent.
    #[inline]
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in paint order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Total primitive draws one `render_all` issues (excluding the clear).
    pub fn draw_call_count(&self) -> usize {
        self.shapes.iter().map(Shape::draw_calls).sum()
    }

    /// Full redraw: one clear, then every shape in order.
    ///
    /// Nothing is cached between calls. The returned stats are a diagnostic
    /// side channel and do not affect what gets drawn.
    pub fn render_all(&self, raster: &mut dyn Rasterizer) -> RenderStats {
        let start = Instant::now();

        raster.clear();
        for shape in &self.shapes {
            shape.render(raster);
        }

        let stats = RenderStats::new(self.shapes.len(), start.elapsed());
        log::trace!("{stats}");
        stats
    }
}

impl Extend<Shape> for Scene {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        self.shapes.extend(iter);
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self { shapes: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Shape;
    type IntoIter = core::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
