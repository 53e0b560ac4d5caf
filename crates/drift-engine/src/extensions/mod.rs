// extensions/mod.rs
//
// Small decoupled helpers shared by the particle and connection systems.

pub mod smoothing;

pub use smoothing::{lerp, lerp_vec2, proximity, smooth};
