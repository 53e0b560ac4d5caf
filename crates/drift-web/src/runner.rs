use drift_engine::{
    Field, FieldConfig, FrameLoop, FrameOutcome, InputEvent, InputQueue, Pointer, Surface,
};

/// Owns one field and everything needed to drive it from a host frame callback.
///
/// The browser bridge keeps a single runner in a `thread_local!`, because
/// wasm-bindgen cannot export generic structs directly. Listeners only push
/// into the input queue; the frame callback drains it.
pub struct FieldRunner<S: Surface> {
    field: Field,
    input: InputQueue,
    frame_loop: FrameLoop,
    surface: Option<S>,
    /// Timestamp (ms) of the previous animation frame.
    last_timestamp: Option<f64>,
}

impl<S: Surface> FieldRunner<S> {
    pub fn new(config: FieldConfig, seed: u64, surface: Option<S>) -> Self {
        let frame_loop = FrameLoop::new(config.fixed_dt);
        Self {
            field: Field::new(config, seed),
            input: InputQueue::new(),
            frame_loop,
            surface,
            last_timestamp: None,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Begin animating. Returns false if already running.
    pub fn start(&mut self) -> bool {
        self.last_timestamp = None;
        let started = self.frame_loop.start();
        if started {
            log::info!("field loop started");
        }
        started
    }

    /// Stop animating. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        let stopped = self.frame_loop.stop();
        if stopped {
            log::info!("field loop stopped after {} frames", self.frame_loop.frames());
        }
        stopped
    }

    /// Push an input event; applied at the start of the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Resize immediately (surface backing store and particle collection).
    pub fn resize(&mut self, width: f32, height: f32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
        }
        self.field.resize(width, height);
    }

    /// Replace the configuration; the collection is rebuilt for the current viewport.
    pub fn load_config(&mut self, config: FieldConfig) {
        let running = self.frame_loop.is_running();
        self.frame_loop = FrameLoop::new(config.fixed_dt);
        if running {
            self.frame_loop.start();
        }
        self.field.set_config(config);
        log::info!("field config replaced ({} particles)", self.field.particles().len());
    }

    /// Host frame callback. Returns whether another frame should be scheduled.
    pub fn on_animation_frame(&mut self, timestamp_ms: f64) -> bool {
        let dt = match self.last_timestamp {
            Some(prev) => ((timestamp_ms - prev) / 1000.0) as f32,
            None => self.frame_loop.fixed_dt(),
        };
        self.last_timestamp = Some(timestamp_ms);
        self.tick(dt);
        self.is_running()
    }

    /// Run one host frame of `dt` seconds: apply input, step, render.
    pub fn tick(&mut self, dt: f32) -> FrameOutcome {
        if !self.is_running() {
            return FrameOutcome::Skipped;
        }

        self.apply_input();

        // Steps owed to a skipped frame are dropped, so a canvas that comes
        // back does not fast-forward.
        let steps = self.frame_loop.advance(dt);
        self.field.frame_step(steps, self.surface.as_mut())
    }

    fn apply_input(&mut self) {
        let mut resize = None;
        for event in self.input.drain() {
            match event {
                InputEvent::PointerMove { x, y } => {
                    self.field.set_pointer(Pointer::from_host(x, y))
                }
                InputEvent::PointerLeave => self.field.set_pointer(Pointer::offscreen()),
                // Only the last size of a burst matters; every resize rebuilds the field.
                InputEvent::Resize { width, height } => resize = Some((width, height)),
            }
        }
        if let Some((width, height)) = resize {
            self.resize(width, height);
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.field.particles().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_engine::{DrawList, Preset};

    fn runner() -> FieldRunner<DrawList> {
        let mut runner = FieldRunner::new(Preset::Wave.config(), 42, Some(DrawList::new()));
        runner.resize(1024.0, 768.0);
        runner
    }

    #[test]
    fn idle_runner_does_not_draw() {
        let mut r = runner();
        assert_eq!(r.tick(1.0 / 60.0), FrameOutcome::Skipped);
        assert!(!r.on_animation_frame(16.0));
    }

    #[test]
    fn running_runner_draws_every_particle() {
        let mut r = runner();
        assert!(r.start());
        match r.tick(1.0 / 60.0) {
            FrameOutcome::Drawn { particles, .. } => assert_eq!(particles, 180),
            other => panic!("expected a drawn frame, got {:?}", other),
        }
        assert_eq!(r.surface().unwrap().circle_count(), 180);
        assert!((r.field().elapsed() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn pointer_events_apply_on_next_frame() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::PointerMove { x: 100.0, y: 200.0 });
        assert_eq!(r.field().pointer(), Pointer::offscreen());
        r.tick(1.0 / 60.0);
        assert_eq!(r.field().pointer(), Pointer::at(100.0, 200.0));
        r.push_input(InputEvent::PointerLeave);
        r.tick(1.0 / 60.0);
        assert_eq!(r.field().pointer(), Pointer::offscreen());
    }

    #[test]
    fn resize_bursts_are_coalesced() {
        let mut r = runner();
        r.start();
        r.push_input(InputEvent::Resize { width: 300.0, height: 500.0 });
        r.push_input(InputEvent::Resize { width: 1920.0, height: 1080.0 });
        r.tick(1.0 / 60.0);
        assert_eq!(r.field().viewport().x, 1920.0);
        assert_eq!(r.particle_count(), 180);
    }

    #[test]
    fn missing_surface_skips_but_keeps_running() {
        let mut r: FieldRunner<DrawList> = FieldRunner::new(Preset::Wave.config(), 1, None);
        r.resize(800.0, 600.0);
        r.start();
        assert_eq!(r.tick(1.0 / 60.0), FrameOutcome::Skipped);
        assert!(r.on_animation_frame(0.0));
        assert_eq!(r.field().elapsed(), 0.0);
    }

    #[test]
    fn surface_coming_back_does_not_fast_forward() {
        let mut r = runner();
        r.start();
        r.surface.as_mut().unwrap().ready = false;
        for _ in 0..5 {
            assert_eq!(r.tick(1.0 / 60.0), FrameOutcome::Skipped);
        }
        r.surface.as_mut().unwrap().ready = true;
        assert!(matches!(r.tick(1.0 / 60.0), FrameOutcome::Drawn { .. }));
        assert!((r.field().elapsed() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn stop_ends_scheduling() {
        let mut r = runner();
        r.start();
        assert!(r.on_animation_frame(0.0));
        assert!(r.stop());
        assert!(!r.on_animation_frame(16.7));
        assert!(!r.stop());
    }

    #[test]
    fn timestamps_drive_fixed_steps() {
        let mut r = runner();
        r.start();
        r.on_animation_frame(1000.0);
        // ~33ms later: two fixed steps
        r.on_animation_frame(1033.4);
        assert!((r.field().elapsed() - 3.0 / 60.0).abs() < 1e-4);
    }

    #[test]
    fn load_config_keeps_loop_state() {
        let mut r = runner();
        r.start();
        r.load_config(Preset::Constellation.config());
        assert!(r.is_running());
        assert_eq!(r.particle_count(), 128);
    }
}
