/// Fixed timestep accumulator.
/// Ensures the field advances at a consistent rate regardless of display refresh rate.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Maximum steps a single frame may run.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        if !(frame_dt > 0.0) {
            return 0;
        }
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death after a backgrounded tab resumes
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        // Tolerate float drift so an exact frame still counts as one step
        let steps = ((self.accumulator + self.dt * 1e-3) / self.dt) as u32;
        self.accumulator = (self.accumulator - steps as f32 * self.dt).max(0.0);
        steps
    }

    /// Drop any partial step, e.g. when the loop restarts.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
