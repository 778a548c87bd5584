use bytemuck::{Pod, Zeroable};

use crate::coords::{Color, Vec2, Viewport};
use crate::raster::Rasterizer;

/// One vertex as uploaded to the GPU (24 bytes).
///
///  offset  0  pos    [f32; 2]   loc 0
///  offset  8  color  [f32; 4]   loc 1
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl ColorVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// CPU-side triangle list filled through [`Rasterizer`].
///
/// `clear` throws away everything drawn so far and latches the current clear
/// color as the frame background, so only geometry after the last clear
/// reaches the screen. Changing the clear color afterwards only affects the
/// next `clear`.
///
/// Triangles past `vertex_limit` are counted and discarded.
#[derive(Debug, Clone)]
pub struct TriangleBatch {
    viewport: Viewport,
    color: Color,
    clear_color: Color,
    background: Color,
    vertices: Vec<ColorVertex>,
    vertex_limit: usize,
    dropped: usize,
}

impl TriangleBatch {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_vertex_limit(viewport, usize::MAX)
    }

    pub fn with_vertex_limit(viewport: Viewport, vertex_limit: usize) -> Self {
        Self {
            viewport,
            color: Color::WHITE,
            clear_color: Color::BLACK,
            background: Color::BLACK,
            vertices: Vec::new(),
            vertex_limit,
            dropped: 0,
        }
    }

    /// Triangles discarded since the last `clear` for lack of room.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Color the frame is cleared to before the batch is drawn.
    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn push(&mut self, p: Vec2) {
        self.vertices.push(ColorVertex {
            pos: p.into(),
            color: self.color.to_array(),
        });
    }
}

impl Rasterizer for TriangleBatch {
    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn draw_filled_triangle(&mut self, [a, b, c]: [Vec2; 3]) {
        if self.is_full() {
            if self.dropped == 0 {
                log::warn!("triangle batch full at {} vertices; dropping the rest", self.vertices.len());
            }
            self.dropped += 1;
            return;
        }
        self.push(a);
        self.push(b);
        self.push(c);
    }

    /// Square quad, `diameter_px` logical pixels on a side.
    fn draw_point(&mut self, center: Vec2, diameter_px: f32) {
        if !self.viewport.is_valid() {
            return;
        }
        let h = self.viewport.pixel_extent_ndc(diameter_px);
        let bl = Vec2::new(center.x - h.x, center.y - h.y);
        let br = Vec2::new(center.x + h.x, center.y - h.y);
        let tr = Vec2::new(center.x + h.x, center.y + h.y);
        let tl = Vec2::new(center.x - h.x, center.y + h.y);
        self.draw_filled_triangle([bl, br, tr]);
        self.draw_filled_triangle([bl, tr, tl]);
    }

    fn clear(&mut self) {
        self.vertices.clear();
        self.dropped = 0;
        self.background = self.clear_color;
    }

    fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    fn is_full(&self) -> bool {
        self.vertex_limit - self.vertices.len().min(self.vertex_limit) < 3
    }
}
