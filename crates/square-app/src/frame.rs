use glam::Mat4;
use winit::dpi::PhysicalSize;

use square_engine::coords::Viewport;
use square_engine::paint::Color;
use square_engine::render::transform;

use crate::config::Animation;

/// Per-frame values derived from elapsed time and the current window size.
///
/// Nothing here survives the frame; it is rebuilt every iteration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameState {
    pub elapsed: f32,
    pub size: PhysicalSize<u32>,
    pub clear_color: Color,
    pub mvp: Mat4,
}

impl FrameState {
    /// Returns `None` for a window with no area (minimized), which has no
    /// meaningful aspect ratio.
    pub fn compute(elapsed: f32, size: PhysicalSize<u32>, animation: &Animation) -> Option<Self> {
        let aspect = Viewport::from_physical(size).aspect_ratio()?;
        let angle = transform::rotation_angle(elapsed, animation.degrees_per_second);

        Some(Self {
            elapsed,
            size,
            clear_color: clear_color(elapsed, animation.hue_speed),
            mvp: transform::model_view_projection(aspect, animation.view_scale, angle),
        })
    }
}

/// Hue (fraction of a turn) of the background at `elapsed` seconds.
#[inline]
pub fn hue(elapsed: f32, speed: f32) -> f32 {
    (elapsed * speed).rem_euclid(1.0)
}

/// Fully saturated, full-value background color at `elapsed` seconds.
pub fn clear_color(elapsed: f32, speed: f32) -> Color {
    Color::from_hsv(hue(elapsed, speed), 1.0, 1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    // ── hue ───────────────────────────────────────────────────────────────

    #[test]
    fn hue_cycles_every_ten_seconds() {
        assert!(close(hue(0.0, 0.1), 0.0));
        assert!(close(hue(2.5, 0.1), 0.25));
        assert!(close(hue(12.5, 0.1), 0.25));
        assert!(close(hue(9.0, 0.1), 0.9));
    }

    #[test]
    fn clear_color_follows_hsv() {
        for t in [0.0f32, 1.3, 4.2, 7.7, 33.0] {
            let expected = Color::from_hsv((t * 0.1) % 1.0, 1.0, 1.0, 1.0);
            let c = clear_color(t, 0.1);
            assert!(close(c.r, expected.r) && close(c.g, expected.g) && close(c.b, expected.b));
            assert_eq!(c.a, 1.0);
        }
    }

    // ── frame state ───────────────────────────────────────────────────────

    #[test]
    fn aspect_comes_from_the_given_size() {
        let anim = Animation::default();
        let a = FrameState::compute(0.0, PhysicalSize::new(1200, 800), &anim).unwrap();
        let b = FrameState::compute(0.0, PhysicalSize::new(800, 800), &anim).unwrap();

        let expected_a = transform::model_view_projection(1.5, 3.0, 0.0);
        let expected_b = transform::model_view_projection(1.0, 3.0, 0.0);
        assert!(a.mvp.abs_diff_eq(expected_a, 1e-6));
        assert!(b.mvp.abs_diff_eq(expected_b, 1e-6));
    }

    #[test]
    fn rotation_uses_elapsed_time() {
        let anim = Animation::default();
        let s = FrameState::compute(0.25, PhysicalSize::new(600, 600), &anim).unwrap();
        let expected =
            transform::model_view_projection(1.0, 3.0, std::f32::consts::PI / 180.0 * 0.25 * 360.0);
        assert!(s.mvp.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn quarter_second_turns_right_edge_downward() {
        let anim = Animation::default();
        let s = FrameState::compute(0.25, PhysicalSize::new(600, 600), &anim).unwrap();
        let p = transform::project_point(s.mvp, 0.5, 0.0);
        assert!(p.x.abs() < 1e-4, "{p:?}");
        assert!((p.y + 0.5 / 1.5).abs() < 1e-4, "{p:?}");
    }

    #[test]
    fn zero_height_has_no_state() {
        let anim = Animation::default();
        assert!(FrameState::compute(1.0, PhysicalSize::new(1200, 0), &anim).is_none());
    }
}
