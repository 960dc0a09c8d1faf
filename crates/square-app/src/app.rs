use anyhow::{Context, Result};

use square_engine::coords::Viewport;
use square_engine::core::{App, AppControl, FrameCtx, InitCtx};
use square_engine::render::{QuadGeometry, QuadRenderer, Vertex, QUAD_INDICES, QUAD_VERTICES};
use square_engine::shader::{ShaderProgram, ShaderSources};
use square_engine::texture::{load_rgba, SamplerSettings, Texture2d};

use crate::config::{SquareConfig, MVP_UNIFORM};
use crate::frame::FrameState;

/// Application state: configuration, the current viewport, and the GPU
/// resources created in `on_init`.
pub struct SquareApp {
    config: SquareConfig,
    viewport: Viewport,
    renderer: Option<QuadRenderer>,
}

impl SquareApp {
    pub fn new(config: SquareConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            renderer: None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl App for SquareApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()> {
        let rctx = ctx.render_ctx();

        let geometry = QuadGeometry::upload(rctx.device, &QUAD_VERTICES, &QUAD_INDICES);

        let shader_path = self.config.resources.shader_path();
        let sources = ShaderSources::load(&shader_path)?;
        let program = ShaderProgram::build(
            rctx.device,
            &sources,
            &Vertex::locations(),
            MVP_UNIFORM,
            self.config.shader_failure_policy,
        )
        .with_context(|| format!("failed to build shader {}", shader_path.display()))?;

        let image = load_rgba(&self.config.resources.image_path())?;
        let texture = Texture2d::upload(
            rctx.device,
            rctx.queue,
            &image,
            SamplerSettings::default(),
            "square texture",
        );

        self.renderer = Some(QuadRenderer::new(&rctx, geometry, program, texture));
        log::info!("setup complete");
        Ok(())
    }

    fn on_resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };

        // Size is read from the window every frame, not taken from the last resize.
        let size = ctx.window.inner_size();
        let Some(state) = FrameState::compute(ctx.time.elapsed, size, &self.config.animation)
        else {
            return AppControl::Continue;
        };

        let viewport = self.viewport;
        ctx.render(state.clear_color, |rctx, pass| {
            renderer.prepare(rctx.queue, state.mvp);
            renderer.draw(pass, viewport.clamped_to(rctx.target_size));
        })
    }

    fn on_exit(&mut self) {
        if let Some(renderer) = self.renderer.take() {
            renderer.release();
            log::info!("gpu resources released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalSize;

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn viewport_starts_empty() {
        let app = SquareApp::new(SquareConfig::default());
        assert!(app.viewport().is_empty());
    }

    #[test]
    fn resize_covers_the_whole_framebuffer() {
        let mut app = SquareApp::new(SquareConfig::default());
        for (w, h) in [(1200, 800), (1, 1), (640, 1080), (3840, 2160), (2400, 1600)] {
            app.on_resize(Viewport::from_physical(PhysicalSize::new(w, h)));
            assert_eq!(app.viewport(), Viewport::new(0, 0, w, h));
        }
    }

    #[test]
    fn latest_resize_wins() {
        let mut app = SquareApp::new(SquareConfig::default());
        app.on_resize(Viewport::from_physical(PhysicalSize::new(1200, 800)));
        app.on_resize(Viewport::from_physical(PhysicalSize::new(300, 200)));
        assert_eq!(app.viewport(), Viewport::new(0, 0, 300, 200));
    }

    #[test]
    fn exit_without_init_is_harmless() {
        let mut app = SquareApp::new(SquareConfig::default());
        app.on_exit();
        app.on_exit();
    }
}
