//! Connection lines between nearby particles and from the pointer.
//!
//! Pairs are found with a plain O(n²) scan. Counts are capped at
//! [`MAX_PARTICLES`](crate::api::config::MAX_PARTICLES), which keeps this
//! under ~25k distance checks per frame.

use glam::Vec2;

use crate::api::config::{LinkStyle, PointerLinkStyle};
use crate::components::particle::Particle;
use crate::extensions::smoothing::{lerp_vec2, proximity};
use crate::renderer::surface::Surface;

/// Opacity of a line of length `distance`.
///
/// Falls linearly from `max_alpha` at 0 to 0 at `threshold`. Returns `None`
/// at or beyond the threshold: such lines are never drawn.
pub fn link_alpha(distance: f32, threshold: f32, max_alpha: f32) -> Option<f32> {
    if !(distance < threshold) {
        return None;
    }
    Some(max_alpha * (1.0 - distance / threshold).clamp(0.0, 1.0))
}

/// Opacity of a pointer link of length `distance`.
///
/// Drops by 1.0 per `style.falloff` pixels from `style.max_alpha`. `None`
/// once it reaches zero or the particle is outside `range`.
pub fn pointer_link_alpha(distance: f32, range: f32, style: &PointerLinkStyle) -> Option<f32> {
    if !(distance < range) || !(style.falloff > 0.0) {
        return None;
    }
    let alpha = style.max_alpha - distance / style.falloff;
    (alpha > 0.0).then_some(alpha)
}

/// Visit every unordered pair `(i, j)`, `i < j`, closer than `threshold`.
pub fn for_each_pair_within(
    particles: &[Particle],
    threshold: f32,
    mut visit: impl FnMut(usize, usize, f32),
) {
    for (i, a) in particles.iter().enumerate() {
        for (j, b) in particles.iter().enumerate().skip(i + 1) {
            let distance = a.position.distance(b.position);
            if distance < threshold {
                visit(i, j, distance);
            }
        }
    }
}

/// Stroke a line between every close pair. Returns the number of lines drawn.
///
/// With a highlight color and an active pointer, lines whose midpoint is
/// within `pointer_range` blend toward the highlight by proximity.
pub fn draw_connections<S: Surface + ?Sized>(
    particles: &[Particle],
    style: &LinkStyle,
    pointer: Option<Vec2>,
    pointer_range: f32,
    surface: &mut S,
) -> usize {
    let mut drawn = 0;
    for_each_pair_within(particles, style.distance, |i, j, distance| {
        let Some(alpha) = link_alpha(distance, style.distance, style.max_alpha) else {
            return;
        };
        let from = particles[i].position;
        let to = particles[j].position;
        let color = match (style.highlight, pointer) {
            (Some(highlight), Some(p)) => {
                let mid = lerp_vec2(from, to, 0.5);
                style
                    .color
                    .lerp(highlight, proximity(mid.distance(p), pointer_range))
            }
            _ => style.color,
        };
        surface.stroke_line(from, to, style.width, color.with_alpha(alpha));
        drawn += 1;
    });
    drawn
}

/// Stroke a line from the pointer to every particle it reaches.
/// Returns the number of lines drawn.
pub fn draw_pointer_links<S: Surface + ?Sized>(
    particles: &[Particle],
    style: &PointerLinkStyle,
    pointer: Vec2,
    range: f32,
    surface: &mut S,
) -> usize {
    let mut drawn = 0;
    for particle in particles {
        let distance = pointer.distance(particle.position);
        if let Some(alpha) = pointer_link_alpha(distance, range, style) {
            let color = style.color.with_alpha(alpha);
            surface.stroke_line(pointer, particle.position, style.width, color);
            drawn += 1;
        }
    }
    drawn
}
