use winit::window::Window;

use crate::coords::{Vec2, Viewport};
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::{RenderCtx, RenderTarget, TriangleBatch, TriangleRenderer, vertex_limit};
use crate::time::FrameTime;

use super::app::AppControl;

/// The app's handle on its window.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Window size in logical pixels.
    pub fn viewport(&self) -> Viewport {
        let phys = self.window.inner_size();
        let logi: winit::dpi::LogicalSize<f64> = phys.to_logical(self.window.scale_factor());
        Viewport::new(logi.width as f32, logi.height as f32)
    }

    /// Logical-pixel pointer position to NDC for this window.
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        self.viewport().to_ndc(Vec2::new(x, y))
    }

    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback
/// - `'w` is the window borrow carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub renderer: &'a mut TriangleRenderer,
    pub input: &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Lets `draw` fill a fresh [`TriangleBatch`] sized to the window, then
    /// draws and presents it.
    ///
    /// Surface errors skip the frame, or return `Exit` when unrecoverable.
    pub fn render<F>(&mut self, draw: F) -> AppControl
    where
        F: FnOnce(&mut TriangleBatch),
    {
        let viewport = self.window.viewport();
        let mut batch = TriangleBatch::with_vertex_limit(viewport, vertex_limit(self.gpu.device()));
        draw(&mut batch);

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("skipping frame: {err}");
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface lost for good, shutting down");
                        AppControl::Exit
                    }
                    _ => AppControl::Continue,
                };
            }
        };

        let rctx = RenderCtx::from_gpu(self.gpu, viewport);

        // `target` borrows the encoder; it must be gone before `submit` takes the frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, &batch);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}
