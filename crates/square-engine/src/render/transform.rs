//! Model-view-projection math for the spinning quad.

use glam::{Mat4, Vec4};

/// Converts a rotation rate in degrees per second into an angle in radians.
#[inline]
pub fn rotation_angle(elapsed_secs: f32, degrees_per_sec: f32) -> f32 {
    std::f32::consts::PI / 180.0 * elapsed_secs * degrees_per_sec
}

/// Orthographic projection of a view volume `aspect * scale` wide and
/// `scale` tall, centered on the origin, depth range `[0, 1]`.
pub fn orthographic(aspect: f32, scale: f32) -> Mat4 {
    let half_w = aspect * scale * 0.5;
    let half_h = scale * 0.5;
    Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, 0.0, 1.0)
}

/// Projection composed with a clockwise rotation of `angle` radians in the
/// XY plane: the model is rotated first, then projected, so the quad keeps
/// its shape at any window aspect ratio.
pub fn model_view_projection(aspect: f32, scale: f32, angle: f32) -> Mat4 {
    orthographic(aspect, scale) * Mat4::from_rotation_z(-angle)
}

/// GPU layout of the `u_mvp` uniform block (std140, column-major).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MvpUniform {
    pub mvp: [[f32; 4]; 4],
}

impl MvpUniform {
    pub fn new(mvp: Mat4) -> Self {
        Self {
            mvp: mvp.to_cols_array_2d(),
        }
    }
}

impl Default for MvpUniform {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY)
    }
}

/// Transforms a model-space point in the z = 0 plane to clip space.
pub fn project_point(mvp: Mat4, x: f32, y: f32) -> Vec4 {
    mvp * Vec4::new(x, y, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn rotation_angle_matches_degrees_to_radians() {
        let pi = std::f32::consts::PI;
        for t in [0.0f32, 0.1, 0.25, 1.0, 3.7] {
            assert!(close(rotation_angle(t, 360.0), pi / 180.0 * t * 360.0));
        }
        assert!(close(rotation_angle(1.0, 360.0), 2.0 * pi));
        assert!(close(rotation_angle(0.25, 360.0), pi / 2.0));
    }

    // ── projection ────────────────────────────────────────────────────────

    #[test]
    fn orthographic_maps_volume_edges_to_ndc() {
        let p = orthographic(1.5, 3.0);
        let right_top = project_point(p, 2.25, 1.5);
        assert!(close(right_top.x, 1.0) && close(right_top.y, 1.0));
        let left_bottom = project_point(p, -2.25, -1.5);
        assert!(close(left_bottom.x, -1.0) && close(left_bottom.y, -1.0));
    }

    #[test]
    fn z_zero_lands_inside_depth_range() {
        let clip = project_point(orthographic(1.0, 3.0), 0.0, 0.0);
        assert!((0.0..=1.0).contains(&clip.z));
    }

    // ── mvp ───────────────────────────────────────────────────────────────

    #[test]
    fn unrotated_corner() {
        let mvp = model_view_projection(1.5, 3.0, 0.0);
        let c = project_point(mvp, 0.5, 0.5);
        assert!(close(c.x, 0.5 / 2.25));
        assert!(close(c.y, 0.5 / 1.5));
    }

    #[test]
    fn rotation_happens_before_projection() {
        // A quarter turn moves +X to -Y, then the projection scales Y.
        let mvp = model_view_projection(2.0, 3.0, std::f32::consts::FRAC_PI_2);
        let c = project_point(mvp, 0.5, 0.0);
        assert!(close(c.x, 0.0), "{c:?}");
        assert!(close(c.y, -0.5 / 1.5), "{c:?}");
    }

    #[test]
    fn positive_angles_turn_clockwise() {
        let mvp = model_view_projection(1.0, 3.0, 0.1);
        let c = project_point(mvp, 0.5, 0.0);
        assert!(c.x > 0.0 && c.y < 0.0, "{c:?}");

        let up = project_point(mvp, 0.0, 0.5);
        assert!(up.x > 0.0 && up.y > 0.0, "{up:?}");
    }

    #[test]
    fn wider_window_narrows_the_quad() {
        let narrow = project_point(model_view_projection(1.0, 3.0, 0.0), 0.5, 0.0);
        let wide = project_point(model_view_projection(2.0, 3.0, 0.0), 0.5, 0.0);
        assert!(close(wide.x * 2.0, narrow.x));
    }

    // ── uniform ───────────────────────────────────────────────────────────

    #[test]
    fn uniform_is_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u = MvpUniform::new(m);
        assert_eq!(u.mvp[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(std::mem::size_of::<MvpUniform>(), 64);
    }
}
