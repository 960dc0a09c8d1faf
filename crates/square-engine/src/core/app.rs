use anyhow::Result;
use winit::event::WindowEvent;

use crate::coords::Viewport;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by [`crate::window::Runtime`].
///
/// Call order: `on_init` once, `on_resize` with the initial size, then any
/// number of `on_window_event` / `on_resize` / `on_frame`, and `on_exit` once
/// after the loop stops. Everything runs on the event-loop thread.
pub trait App {
    /// Creates GPU resources. Called once the window and GPU context exist.
    ///
    /// An error stops the runtime before the first frame.
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> Result<()>;

    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called synchronously from event dispatch when the framebuffer size changes.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called once per frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Releases resources. The GPU context is still alive at this point.
    fn on_exit(&mut self) {}
}
