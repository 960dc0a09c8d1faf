use winit::dpi::PhysicalSize;
use winit::window::{Window, WindowId};

use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::RenderCtx;
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-window handles and window metadata.
pub struct WindowCtx<'a> {
    pub id: WindowId,
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Current drawable size in physical pixels, queried from the window.
    pub fn inner_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }
}

/// Context passed to `App::on_init`.
pub struct InitCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

impl<'a, 'w> InitCtx<'a, 'w> {
    pub fn render_ctx(&self) -> RenderCtx<'_> {
        render_ctx(self.gpu)
    }
}

/// Per-frame context passed to `App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires a frame, opens one render pass cleared to `clear`, hands it to
    /// `draw`, then submits and presents.
    ///
    /// With MSAA the pass resolves into the surface texture. A frame that
    /// cannot be acquired is skipped; only a fatal surface error returns
    /// [`AppControl::Exit`].
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut wgpu::RenderPass<'_>),
    {
        let size = self.gpu.size();
        if size.width == 0 || size.height == 0 {
            return AppControl::Continue;
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(err);
                if action == SurfaceErrorAction::Fatal {
                    log::error!("fatal surface error; stopping");
                    return AppControl::Exit;
                }
                return AppControl::Continue;
            }
        };

        let rctx = render_ctx(self.gpu);

        // The pass borrows `frame.encoder`; it must end before submit() takes the frame.
        {
            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("square frame pass"),
                color_attachments: &[Some(
                    self.gpu.color_attachment(&frame.view, clear.to_wgpu()),
                )],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            draw(&rctx, &mut pass);
        }

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

fn render_ctx<'g>(gpu: &'g Gpu<'_>) -> RenderCtx<'g> {
    RenderCtx::new(
        gpu.device(),
        gpu.queue(),
        gpu.surface_format(),
        gpu.sample_count(),
        gpu.size(),
    )
}
