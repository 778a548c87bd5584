use crate::render::{RenderCtx, RenderTarget};

use super::batch::{ColorVertex, TriangleBatch};

/// Draws a [`TriangleBatch`] in a single render pass.
///
/// The pass clears to the batch background, then draws every triangle in
/// submission order. GPU resources are created on first use and rebuilt
/// only when the surface format changes or the batch outgrows the buffer.
/// The buffer never grows past the device's buffer-size limit; geometry
/// beyond it is cut at a triangle boundary.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, batch: &TriangleBatch) {
        self.ensure_pipeline(ctx);

        let limit = ctx.vertex_limit();
        let vertices = fit_to_limit(batch.vertices(), limit);
        if vertices.len() < batch.vertices().len() {
            log::warn!(
                "batch of {} vertices exceeds the device limit of {limit}; drawing {}",
                batch.vertices().len(),
                vertices.len()
            );
        }

        if !vertices.is_empty() {
            self.ensure_vertex_capacity(ctx, vertices.len(), limit);
            if let Some(vbo) = self.vbo.as_ref() {
                ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
            }
        }

        let mut rpass = target.clear_pass("easel triangle pass", batch.background());

        if vertices.is_empty() {
            return;
        }

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("easel triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("easel triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("easel triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[ColorVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // Later triangles overwrite earlier ones, like an unblended canvas.
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize, limit: usize) {
        if required <= self.vertex_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, limit);
        let new_size = (new_cap * std::mem::size_of::<ColorVertex>()) as u64;
        log::debug!("growing triangle vertex buffer to {new_cap} vertices");
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("easel triangle vbo"),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vertex_capacity = new_cap;
    }
}

/// Longest prefix of whole triangles that fits in `limit` vertices.
fn fit_to_limit(vertices: &[ColorVertex], limit: usize) -> &[ColorVertex] {
    let len = vertices.len().min(limit);
    &vertices[..len - len % 3]
}

/// Buffer size for `required` vertices, which must not exceed `limit`.
fn grown_capacity(required: usize, limit: usize) -> usize {
    required
        .checked_next_power_of_two()
        .unwrap_or(usize::MAX)
        .max(1024)
        .min(limit)
}
