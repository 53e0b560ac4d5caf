//! Headless pointer-reactive particle field.
//!
//! Particles drift, wrap at the viewport edges, connect with fading lines when
//! close, and are pulled toward the pointer. Everything here is plain Rust:
//! hosts feed input and frame timing in, and receive draw calls through the
//! [`Surface`] trait.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::{
    FieldConfig, CountPolicy, MobilePolicy, MotionParams, PointerParams, AttractionMode,
    AppearanceParams, LinkStyle, PointerLinkStyle, BloomParams, AmbientParams, MAX_PARTICLES,
};
pub use api::error::ConfigError;
pub use api::preset::Preset;
pub use components::color::Rgba;
pub use components::particle::{Particle, StepContext};
pub use crate::core::field::{Field, FrameOutcome};
pub use crate::core::frame_loop::{FrameLoop, LoopState};
pub use crate::core::time::FixedTimestep;
pub use input::pointer::Pointer;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::draw_list::{CircleInstance, LineInstance, DrawList};
pub use renderer::surface::Surface;
pub use systems::rng::Rng;
