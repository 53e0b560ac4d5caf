// extensions/smoothing.rs
//
// Pure interpolation helpers used by the bloom effect and line highlighting.
// No dependencies on Field or Particle, just math.

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    a + (b - a) * t
}

/// Exponential smoothing: `value * alpha + target * (1 - alpha)`.
///
/// `alpha` is the retention factor. 0.0 snaps to the target, values close
/// to 1.0 approach it slowly.
#[inline]
pub fn smooth(value: f32, target: f32, alpha: f32) -> f32 {
    value * alpha + target * (1.0 - alpha)
}

/// Linear falloff inside a radius: 1.0 at the center, 0.0 at and beyond `range`.
#[inline]
pub fn proximity(distance: f32, range: f32) -> f32 {
    if range <= 0.0 || distance >= range {
        return 0.0;
    }
    ((range - distance) / range).clamp(0.0, 1.0)
}
