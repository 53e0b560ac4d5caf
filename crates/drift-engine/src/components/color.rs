use serde::{Deserialize, Serialize};

use crate::extensions::smoothing::lerp;

/// RGBA color used for particles and lines. Channels are 0.0 - 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise linear interpolation. `t` is clamped to [0, 1].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// CSS color string understood by Canvas 2D, e.g. `rgba(124, 58, 237, 0.8)`.
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b),
            (self.a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0,
        )
    }

    // Palette used by the presets
    pub const VIOLET: Self = Self::new(124.0 / 255.0, 58.0 / 255.0, 237.0 / 255.0, 1.0);
    pub const LAVENDER: Self = Self::new(139.0 / 255.0, 92.0 / 255.0, 246.0 / 255.0, 1.0);
    pub const CYAN: Self = Self::new(6.0 / 255.0, 182.0 / 255.0, 212.0 / 255.0, 1.0);
    pub const PINK: Self = Self::new(244.0 / 255.0, 114.0 / 255.0, 182.0 / 255.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

fn channel_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_matches_canvas_format() {
        let c = Rgba::VIOLET.with_alpha(0.8);
        assert_eq!(c.to_css(), "rgba(124, 58, 237, 0.8)");
    }

    #[test]
    fn css_clamps_out_of_range_channels() {
        let c = Rgba::new(1.5, -0.2, 0.5, 2.0);
        assert_eq!(c.to_css(), "rgba(255, 0, 128, 1)");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Rgba::new(0.0, 0.0, 0.0, 0.0);
        let b = Rgba::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.g - 0.5).abs() < 1e-6);
        assert_eq!(a.lerp(b, 4.0), b);
    }
}
