//! The particle field: owns the collection, viewport, pointer and clock.

use glam::Vec2;

use crate::api::config::FieldConfig;
use crate::components::particle::{Particle, StepContext};
use crate::input::pointer::Pointer;
use crate::renderer::surface::Surface;
use crate::systems::connections::{draw_connections, draw_pointer_links};
use crate::systems::rng::Rng;

/// Result of one [`Field::frame_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No usable surface; nothing was updated or drawn.
    Skipped,
    Drawn {
        particles: usize,
        lines: usize,
    },
}

pub struct Field {
    config: FieldConfig,
    particles: Vec<Particle>,
    viewport: Vec2,
    pointer: Pointer,
    rng: Rng,
    /// Simulated seconds, advanced by `config.fixed_dt` per step.
    elapsed: f32,
}

impl Field {
    /// An empty field. Call [`Field::resize`] before the first frame.
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self {
            config,
            particles: Vec::new(),
            viewport: Vec2::ZERO,
            pointer: Pointer::offscreen(),
            rng: Rng::new(seed),
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Swap the configuration and rebuild the collection for the current viewport.
    pub fn set_config(&mut self, config: FieldConfig) {
        self.config = config;
        self.reset_particles();
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: Pointer) {
        self.pointer = pointer;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Take new viewport dimensions and rebuild every particle.
    pub fn resize(&mut self, width: f32, height: f32) {
        let sanitize = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        self.viewport = Vec2::new(sanitize(width), sanitize(height));
        self.reset_particles();
        log::info!(
            "field resized to {}x{} with {} particles",
            self.viewport.x,
            self.viewport.y,
            self.particles.len()
        );
    }

    fn reset_particles(&mut self) {
        self.particles.clear();
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return;
        }
        let count = self.config.count.count_for_width(self.viewport.x);
        log::debug!("count policy gives {} particles for width {}", count, self.viewport.x);
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = Particle::spawn(self.viewport, &self.config, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Advance the simulation by one fixed step.
    pub fn step(&mut self) {
        let ctx = StepContext {
            viewport: self.viewport,
            elapsed: self.elapsed,
            config: &self.config,
        };
        let pointer = self.pointer.position();
        for particle in &mut self.particles {
            particle.update(pointer, &ctx);
        }
        self.elapsed += self.config.fixed_dt;
    }

    /// Draw the current state: clear, connections, pointer links, particles.
    /// Returns the number of lines drawn.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> usize {
        surface.clear(self.viewport.x, self.viewport.y);

        let pointer = self.pointer.position();
        let mut lines = draw_connections(
            &self.particles,
            &self.config.links,
            pointer,
            self.config.pointer.range,
            surface,
        );
        if let (Some(style), Some(p)) = (&self.config.pointer_links, pointer) {
            let range = self.config.pointer.range;
            lines += draw_pointer_links(&self.particles, style, p, range, surface);
        }

        for particle in &self.particles {
            particle.draw(surface);
        }
        lines
    }

    /// One full frame: run `steps` fixed updates, then render.
    ///
    /// A missing or detached surface skips the frame without touching state;
    /// the steps are dropped, not deferred.
    pub fn frame_step<S: Surface + ?Sized>(
        &mut self,
        steps: u32,
        surface: Option<&mut S>,
    ) -> FrameOutcome {
        let Some(surface) = surface else {
            log::trace!("frame skipped: no surface");
            return FrameOutcome::Skipped;
        };
        if !surface.is_ready() {
            log::trace!("frame skipped: surface not ready");
            return FrameOutcome::Skipped;
        }
        for _ in 0..steps {
            self.step();
        }
        let lines = self.render(surface);
        FrameOutcome::Drawn {
            particles: self.particles.len(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::AmbientParams;
    use crate::api::preset::Preset;
    use crate::components::color::Rgba;
    use crate::renderer::draw_list::DrawList;
    use crate::systems::connections::pointer_link_alpha;

    fn wave_field() -> Field {
        let mut field = Field::new(Preset::Wave.config(), 42);
        field.resize(800.0, 600.0);
        field
    }

    #[test]
    fn resize_applies_count_policy() {
        let mut field = Field::new(Preset::Wave.config(), 1);
        field.resize(320.0, 640.0);
        assert_eq!(field.particles().len(), 80);
        field.resize(1920.0, 1080.0);
        assert_eq!(field.particles().len(), 180);
        assert_eq!(field.viewport(), Vec2::new(1920.0, 1080.0));
    }

    #[test]
    fn resize_rebuilds_inside_new_bounds() {
        let mut field = Field::new(Preset::Constellation.config(), 9);
        field.resize(1600.0, 900.0);
        field.resize(400.0, 300.0);
        assert_eq!(field.particles().len(), 50);
        for p in field.particles() {
            assert!(p.position.x < 400.0 && p.position.y < 300.0);
        }
    }

    #[test]
    fn zero_viewport_has_no_particles() {
        let mut field = Field::new(Preset::Wave.config(), 1);
        field.resize(0.0, 600.0);
        assert!(field.particles().is_empty());
        field.resize(f32::NAN, 600.0);
        assert!(field.particles().is_empty());
    }

    #[test]
    fn same_seed_same_layout() {
        let a = wave_field();
        let b = wave_field();
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn scenario_800x600_sentinel_pointer() {
        let mut config = Preset::Wave.config();
        config.ambient = AmbientParams::NONE;
        let mut field = Field::new(config, 3);
        field.resize(800.0, 600.0);
        field.set_pointer(Pointer::from_host(-1000.0, -1000.0));
        *field.particles_mut() = vec![Particle::new(
            Vec2::new(10.0, 10.0),
            Vec2::new(0.1, 0.1),
            1.0,
            Rgba::WHITE,
        )];
        let mut list = DrawList::new();
        let outcome = field.frame_step(1, Some(&mut list));
        assert_eq!(outcome, FrameOutcome::Drawn { particles: 1, lines: 0 });
        let p = &field.particles()[0];
        assert!((p.position.x - 10.1).abs() < 1e-5);
        assert!((p.position.y - 10.1).abs() < 1e-5);
    }

    #[test]
    fn positions_stay_wrapped_over_many_frames() {
        let mut field = wave_field();
        field.set_pointer(Pointer::at(400.0, 300.0));
        let mut list = DrawList::new();
        for _ in 0..600 {
            field.frame_step(1, Some(&mut list));
            for p in field.particles() {
                assert!((0.0..800.0).contains(&p.position.x));
                assert!((0.0..600.0).contains(&p.position.y));
            }
        }
    }

    #[test]
    fn velocities_decay_under_drag_without_forces() {
        let mut config = Preset::Wave.config();
        config.ambient = AmbientParams::NONE;
        let mut field = Field::new(config, 77);
        field.resize(800.0, 600.0);
        let initial: f32 = field.particles().iter().map(|p| p.velocity.length()).sum();
        assert!(initial > 0.0);
        let mut list = DrawList::new();
        let mut previous = initial;
        for _ in 0..200 {
            field.frame_step(1, Some(&mut list));
            let total: f32 = field.particles().iter().map(|p| p.velocity.length()).sum();
            assert!(total <= previous);
            previous = total;
        }
        // 0.95^200 ≈ 3.5e-5
        assert!(previous < initial * 1e-4, "{} vs {}", previous, initial);
    }

    #[test]
    fn missing_surface_skips_without_mutation() {
        let mut field = wave_field();
        let before = field.particles().to_vec();
        let outcome = field.frame_step::<DrawList>(1, None);
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(field.elapsed(), 0.0);
    }

    #[test]
    fn detached_surface_skips() {
        let mut field = wave_field();
        let mut list = DrawList::new();
        list.ready = false;
        assert_eq!(field.frame_step(1, Some(&mut list)), FrameOutcome::Skipped);
        assert!(list.cleared.is_none());
    }

    #[test]
    fn render_draws_lines_before_particles() {
        let field = wave_field();
        let mut list = DrawList::new();
        let lines = field.render(&mut list);
        assert_eq!(list.cleared, Some((800.0, 600.0)));
        assert_eq!(list.circle_count() as usize, field.particles().len());
        assert_eq!(list.line_count() as usize, lines);
        for line in &list.lines {
            assert!(line.start().distance(line.end()) < field.config().links.distance);
        }
    }

    #[test]
    fn pointer_links_follow_pointer_activity() {
        let mut field = Field::new(Preset::Constellation.config(), 5);
        field.resize(800.0, 600.0);
        let mut list = DrawList::new();
        let without = field.render(&mut list);
        field.set_pointer(Pointer::at(400.0, 300.0));
        let with = field.render(&mut list);
        let style = field.config().pointer_links.clone().unwrap();
        let reached = field
            .particles()
            .iter()
            .map(|p| p.position.distance(Vec2::new(400.0, 300.0)))
            .filter(|&d| pointer_link_alpha(d, 300.0, &style).is_some())
            .count();
        assert_eq!(with, without + reached);
    }

    #[test]
    fn frame_step_runs_the_requested_steps() {
        let mut field = wave_field();
        let mut list = DrawList::new();
        let outcome = field.frame_step(3, Some(&mut list));
        match outcome {
            FrameOutcome::Drawn { particles, lines } => {
                assert_eq!(particles, 180);
                assert_eq!(lines, list.line_count() as usize);
            }
            other => panic!("expected a drawn frame, got {:?}", other),
        }
        assert!((field.elapsed() - 3.0 / 60.0).abs() < 1e-6);

        let before = field.particles().to_vec();
        field.frame_step(0, Some(&mut list));
        assert_eq!(field.particles(), &before[..]);
        assert_eq!(list.circle_count(), 180);
    }

    #[test]
    fn elapsed_advances_by_fixed_dt() {
        let mut field = wave_field();
        field.step();
        field.step();
        assert!((field.elapsed() - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn set_config_reseeds_collection() {
        let mut field = wave_field();
        assert_eq!(field.particles().len(), 180);
        field.set_config(Preset::Constellation.config());
        assert_eq!(field.particles().len(), 100);
    }
}
