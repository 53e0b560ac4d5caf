pub mod connections;
pub mod motion;
pub mod rng;
