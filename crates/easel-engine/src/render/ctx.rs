use crate::coords::{Color, Viewport};
use crate::device::Gpu;

use super::batch::ColorVertex;

/// Vertices one buffer of `stride`-byte vertices can hold under
/// `max_buffer_size`, capped to what a single draw call can address.
pub(crate) fn vertices_fitting(max_buffer_size: u64, stride: usize) -> usize {
    let count = max_buffer_size / stride.max(1) as u64;
    count.min(u64::from(u32::MAX)) as usize
}

/// Largest triangle batch, in vertices, `device` can upload in one buffer.
pub fn vertex_limit(device: &wgpu::Device) -> usize {
    vertices_fitting(device.limits().max_buffer_size, std::mem::size_of::<ColorVertex>())
}

/// Everything a renderer reads from the device for one frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical pixels.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    pub fn from_gpu(gpu: &'a Gpu<'_>, viewport: Viewport) -> Self {
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            viewport,
        }
    }

    #[inline]
    pub fn vertex_limit(&self) -> usize {
        vertex_limit(self.device)
    }
}

/// The frame's encoder and swapchain view.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }

    /// Opens a pass that first fills the whole view with `background`.
    pub fn clear_pass(&mut self, label: &str, background: Color) -> wgpu::RenderPass<'_> {
        self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: self.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_value(background)),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        })
    }
}

/// Channels pass through unconverted; the surface decides any encoding.
fn clear_value(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(c.r),
        g: f64::from(c.g),
        b: f64::from(c.b),
        a: f64::from(c.a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_limit_follows_buffer_size() {
        assert_eq!(vertices_fitting(24 * 1000, 24), 1000);
        assert_eq!(vertices_fitting(24 * 1000 + 23, 24), 1000);
        assert_eq!(vertices_fitting(10, 24), 0);
    }

    #[test]
    fn vertex_limit_is_capped_to_draw_range() {
        assert_eq!(vertices_fitting(u64::MAX, 24), u32::MAX as usize);
    }

    #[test]
    fn clear_value_keeps_channels() {
        let c = clear_value(Color::new(2.0, -0.5, 0.25, 1.0));
        assert_eq!((c.r, c.g, c.b, c.a), (2.0, -0.5, 0.25, 1.0));
    }
}
