//! Start/stop contract for the animation loop.
//!
//! The host owns the actual scheduling primitive (`requestAnimationFrame` in
//! the browser). This state machine decides whether a frame should run and
//! how many fixed steps it gets, so the same rules hold for every host.

use super::time::FixedTimestep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, never started.
    Idle,
    Running,
    /// Stopped by the host; may be started again.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
    timestep: FixedTimestep,
    frames: u64,
}

impl FrameLoop {
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            state: LoopState::Idle,
            timestep: FixedTimestep::new(fixed_dt),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Enter `Running`. Returns false if it already was.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.timestep.reset();
        self.state = LoopState::Running;
        true
    }

    /// Enter `Stopped`. Returns false if the loop was not running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = LoopState::Stopped;
        true
    }

    /// Account for one host frame of `frame_dt` seconds.
    /// Returns the number of fixed steps to simulate (always 0 unless running).
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        if !self.is_running() {
            return 0;
        }
        self.frames += 1;
        self.timestep.accumulate(frame_dt)
    }

    /// Frames seen while running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fixed_dt(&self) -> f32 {
        self.timestep.dt()
    }
}
