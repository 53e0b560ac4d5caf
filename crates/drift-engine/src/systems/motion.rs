//! Force and boundary functions applied to every particle each step.

use glam::Vec2;

use crate::api::config::{AmbientParams, PointerParams};

/// Pull toward the pointer.
///
/// Magnitude is `strength * (range - d) / range`, direction is the unit vector
/// toward the pointer. Zero when the pointer is absent, at or beyond `range`,
/// or exactly on top of the particle.
pub fn attraction(position: Vec2, pointer: Option<Vec2>, params: &PointerParams) -> Vec2 {
    let Some(target) = pointer else {
        return Vec2::ZERO;
    };
    let delta = target - position;
    let distance = delta.length();
    if !(distance > 0.0) || distance >= params.range {
        return Vec2::ZERO;
    }
    let force = (params.range - distance) / params.range * params.strength;
    delta / distance * force
}

/// Organic drift: `(sin(y·f + t·s), cos(x·f + t·s)) · amplitude`.
pub fn ambient(position: Vec2, elapsed: f32, params: &AmbientParams) -> Vec2 {
    if params.amplitude == 0.0 {
        return Vec2::ZERO;
    }
    let phase = elapsed * params.time_scale;
    Vec2::new(
        (position.y * params.frequency + phase).sin(),
        (position.x * params.frequency + phase).cos(),
    ) * params.amplitude
}

/// Wrap a coordinate into `[0, extent)`.
pub fn wrap_axis(value: f32, extent: f32) -> f32 {
    if !(extent > 0.0) {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Toroidal wrap into `[0, width) × [0, height)`.
pub fn wrap(position: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        wrap_axis(position.x, viewport.x),
        wrap_axis(position.y, viewport.y),
    )
}
