/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Channel values go to the surface unchanged: no premultiplication and no
/// sRGB encoding step.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts hue/saturation/value to RGB.
    ///
    /// `hue` is a fraction of a full turn and wraps, so `1.25` is the same as
    /// `0.25`. `saturation` and `value` are clamped to `[0, 1]`.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let sector = hue.rem_euclid(1.0) * 6.0;
        let chroma = v * s;
        let x = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            // rem_euclid can round up to exactly 1.0 for tiny negative hues.
            _ => (chroma, 0.0, x),
        };

        let m = v - chroma;
        Self::rgba(r + m, g + m, b + m, alpha)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        let [r, g, b, a] = self.to_array().map(f64::from);
        wgpu::Color { r, g, b, a }
    }
}
