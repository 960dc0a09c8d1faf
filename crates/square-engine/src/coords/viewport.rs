use winit::dpi::PhysicalSize;

/// Rendering viewport rectangle in physical pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole framebuffer of `width x height`: `(0, 0, w, h)`.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn from_physical(size: PhysicalSize<u32>) -> Self {
        Self::from_size(size.width, size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, or `None` for a degenerate viewport.
    #[inline]
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }

    /// Clips the viewport to a render target of `target` size.
    ///
    /// wgpu rejects viewports that extend past the attachment, so a viewport
    /// that is stale for one frame must be shrunk rather than submitted.
    pub fn clamped_to(self, target: PhysicalSize<u32>) -> Self {
        let x = self.x.min(target.width);
        let y = self.y.min(target.height);
        Self {
            x,
            y,
            width: self.width.min(target.width - x),
            height: self.height.min(target.height - y),
        }
    }

    /// Arguments for `wgpu::RenderPass::set_viewport` (depth range 0..1).
    #[inline]
    pub fn to_pass_args(self) -> (f32, f32, f32, f32, f32, f32) {
        (
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
            0.0,
            1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── from_size ─────────────────────────────────────────────────────────

    #[test]
    fn from_size_is_anchored_at_origin() {
        for (w, h) in [(1, 1), (1200, 800), (800, 1200), (3840, 2160), (7, 1)] {
            assert_eq!(Viewport::from_size(w, h), Viewport::new(0, 0, w, h));
        }
    }

    #[test]
    fn from_physical_matches_from_size() {
        let size = PhysicalSize::new(640, 480);
        assert_eq!(Viewport::from_physical(size), Viewport::from_size(640, 480));
    }

    // ── aspect_ratio ──────────────────────────────────────────────────────

    #[test]
    fn aspect_ratio_is_width_over_height() {
        assert_eq!(Viewport::from_size(1200, 800).aspect_ratio(), Some(1.5));
        assert_eq!(Viewport::from_size(800, 1600).aspect_ratio(), Some(0.5));
    }

    #[test]
    fn aspect_ratio_of_zero_height_is_none() {
        assert_eq!(Viewport::from_size(1200, 0).aspect_ratio(), None);
        assert!(Viewport::from_size(0, 10).is_empty());
    }

    // ── clamped_to ────────────────────────────────────────────────────────

    #[test]
    fn clamped_to_shrinks_oversized_viewport() {
        let v = Viewport::from_size(1200, 800).clamped_to(PhysicalSize::new(1000, 900));
        assert_eq!(v, Viewport::from_size(1000, 800));
    }

    #[test]
    fn clamped_to_keeps_fitting_viewport() {
        let v = Viewport::new(10, 20, 100, 100);
        assert_eq!(v.clamped_to(PhysicalSize::new(500, 500)), v);
    }
}
