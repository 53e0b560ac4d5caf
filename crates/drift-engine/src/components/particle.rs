//! A single drifting point of the field.

use glam::Vec2;

use crate::api::config::{AttractionMode, FieldConfig};
use crate::components::color::Rgba;
use crate::extensions::smoothing::{proximity, smooth};
use crate::renderer::surface::Surface;
use crate::systems::motion::{ambient, attraction, wrap};
use crate::systems::rng::Rng;

/// Read-only inputs shared by every particle update in one step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub viewport: Vec2,
    /// Seconds of simulated time since the field started.
    pub elapsed: f32,
    pub config: &'a FieldConfig,
}

/// A single particle with motion and appearance state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Current radius (animates toward a bloom target).
    pub size: f32,
    /// Resting radius.
    pub base_size: f32,
    /// Current color (animates toward a bloom target).
    pub color: Rgba,
    /// Resting color.
    pub base_color: Rgba,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, size: f32, color: Rgba) -> Self {
        Particle {
            position,
            velocity,
            size,
            base_size: size,
            color,
            base_color: color,
        }
    }

    /// Random particle inside the viewport, styled by the config.
    pub fn spawn(viewport: Vec2, config: &FieldConfig, rng: &mut Rng) -> Self {
        let position = Vec2::new(rng.range(0.0, viewport.x), rng.range(0.0, viewport.y));
        let half = config.motion.base_speed * 0.5;
        let velocity = Vec2::new(rng.range(-half, half), rng.range(-half, half));
        let appearance = &config.appearance;
        let size = rng.range(appearance.size_min, appearance.size_max);
        let color = match appearance.palette.len() {
            0 => Rgba::WHITE,
            n => appearance.palette[rng.next_int(n as u32) as usize],
        };
        Particle::new(position, velocity, size, color)
    }

    /// Advance one step: attraction, ambient drift, Euler integration, drag,
    /// wrap, then bloom smoothing.
    pub fn update(&mut self, pointer: Option<Vec2>, ctx: &StepContext<'_>) {
        let config = ctx.config;

        let pull = attraction(self.position, pointer, &config.pointer);
        match config.pointer.mode {
            AttractionMode::Velocity => self.velocity += pull,
            AttractionMode::Displace => self.position += pull,
        }

        self.velocity += ambient(self.position, ctx.elapsed, &config.ambient);

        self.position += self.velocity;
        self.velocity *= config.motion.drag;
        self.position = wrap(self.position, ctx.viewport);

        if let Some(bloom) = &config.bloom {
            let closeness = pointer
                .map(|p| proximity(p.distance(self.position), config.pointer.range))
                .unwrap_or(0.0);
            let target_size = self.base_size * (1.0 + closeness * (bloom.size_scale - 1.0));
            let target_color = self.base_color.lerp(bloom.color, closeness);
            let alpha = bloom.smoothing;
            self.size = smooth(self.size, target_size, alpha);
            self.color = Rgba::new(
                smooth(self.color.r, target_color.r, alpha),
                smooth(self.color.g, target_color.g, alpha),
                smooth(self.color.b, target_color.b, alpha),
                smooth(self.color.a, target_color.a, alpha),
            );
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position, self.size, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::preset::Preset;
    use crate::renderer::draw_list::DrawList;

    fn still_config() -> FieldConfig {
        let mut config = Preset::Wave.config();
        config.ambient.amplitude = 0.0;
        config
    }

    #[test]
    fn scenario_one_step_without_pointer() {
        let config = still_config();
        let ctx = StepContext {
            viewport: Vec2::new(800.0, 600.0),
            elapsed: 0.0,
            config: &config,
        };
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(0.1, 0.1), 1.0, Rgba::WHITE);
        p.update(None, &ctx);
        assert!((p.position.x - 10.1).abs() < 1e-5);
        assert!((p.position.y - 10.1).abs() < 1e-5);
        // Only drag touched the velocity.
        assert!((p.velocity.x - 0.1 * 0.95).abs() < 1e-6);
    }

    #[test]
    fn stays_inside_viewport_for_any_velocity() {
        let config = still_config();
        let viewport = Vec2::new(800.0, 600.0);
        let ctx = StepContext {
            viewport,
            elapsed: 3.5,
            config: &config,
        };
        let mut rng = Rng::new(11);
        for _ in 0..2000 {
            let start = Vec2::new(rng.range(-50.0, 850.0), rng.range(-50.0, 650.0));
            let vel = Vec2::new(rng.range(-2000.0, 2000.0), rng.range(-2000.0, 2000.0));
            let mut p = Particle::new(start, vel, 1.0, Rgba::WHITE);
            p.update(Some(Vec2::new(400.0, 300.0)), &ctx);
            assert!(p.position.x >= 0.0 && p.position.x < viewport.x, "{:?}", p.position);
            assert!(p.position.y >= 0.0 && p.position.y < viewport.y, "{:?}", p.position);
        }
    }

    #[test]
    fn displace_mode_moves_position_not_velocity() {
        let mut config = Preset::Constellation.config();
        config.motion.drag = 1.0;
        let ctx = StepContext {
            viewport: Vec2::new(800.0, 600.0),
            elapsed: 0.0,
            config: &config,
        };
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0, Rgba::WHITE);
        p.update(Some(Vec2::new(200.0, 100.0)), &ctx);
        assert_eq!(p.velocity, Vec2::ZERO);
        // (300 - 100) / 300 * 1.5 = 1.0
        assert!((p.position.x - 101.0).abs() < 1e-4);
    }

    #[test]
    fn velocity_mode_accelerates_toward_pointer() {
        let config = still_config();
        let ctx = StepContext {
            viewport: Vec2::new(800.0, 600.0),
            elapsed: 0.0,
            config: &config,
        };
        let mut p = Particle::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0, Rgba::WHITE);
        p.update(Some(Vec2::new(100.0, 250.0)), &ctx);
        assert!(p.velocity.y > 0.0);
        assert!(p.position.y > 100.0);
    }

    #[test]
    fn bloom_grows_near_pointer_and_relaxes_after() {
        let mut config = Preset::Bloom.config();
        config.ambient.amplitude = 0.0;
        config.pointer.strength = 0.0;
        let ctx = StepContext {
            viewport: Vec2::new(800.0, 600.0),
            elapsed: 0.0,
            config: &config,
        };
        let mut p = Particle::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 2.0, Rgba::LAVENDER);
        for _ in 0..120 {
            p.update(Some(Vec2::new(400.0, 300.0)), &ctx);
        }
        assert!(p.size > 4.9, "size {}", p.size);
        assert!((p.color.g - Rgba::CYAN.g).abs() < 0.01);

        for _ in 0..240 {
            p.update(None, &ctx);
        }
        assert!((p.size - 2.0).abs() < 0.01, "size {}", p.size);
        assert!((p.color.r - Rgba::LAVENDER.r).abs() < 0.01);
    }

    #[test]
    fn no_bloom_without_pointer() {
        let mut config = Preset::Bloom.config();
        config.ambient.amplitude = 0.0;
        let ctx = StepContext {
            viewport: Vec2::new(800.0, 600.0),
            elapsed: 0.0,
            config: &config,
        };
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 1.5, Rgba::VIOLET);
        p.update(None, &ctx);
        assert!((p.size - 1.5).abs() < 1e-6);
        assert!((p.color.b - Rgba::VIOLET.b).abs() < 1e-6);
        assert!((p.color.a - Rgba::VIOLET.a).abs() < 1e-6);
    }

    #[test]
    fn spawn_respects_config_ranges() {
        let config = Preset::Constellation.config();
        let viewport = Vec2::new(640.0, 480.0);
        let mut rng = Rng::new(5);
        for _ in 0..500 {
            let p = Particle::spawn(viewport, &config, &mut rng);
            assert!(p.position.x >= 0.0 && p.position.x < 640.0);
            assert!(p.position.y >= 0.0 && p.position.y < 480.0);
            assert!(p.velocity.x.abs() <= 0.75 && p.velocity.y.abs() <= 0.75);
            assert!(p.size >= 1.0 && p.size < 3.5);
            assert!(config.appearance.palette.contains(&p.color));
        }
    }

    #[test]
    fn draw_emits_one_circle() {
        let p = Particle::new(Vec2::new(3.0, 4.0), Vec2::ZERO, 2.0, Rgba::PINK);
        let mut list = DrawList::new();
        p.draw(&mut list);
        assert_eq!(list.circle_count(), 1);
        assert_eq!(list.circles[0].radius, 2.0);
    }
}
