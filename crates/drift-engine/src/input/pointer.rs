use glam::Vec2;

/// Shared pointer position read by every particle update.
///
/// The browser scripts parked the mouse at `(-1000, -1000)` to mean "no
/// pointer". Here absence is explicit, so attraction, bloom and pointer links
/// are off regardless of how large the configured range is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    position: Option<Vec2>,
}

impl Pointer {
    /// Coordinates hosts send to mean "pointer left the page".
    pub const OFFSCREEN_SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub const fn offscreen() -> Self {
        Self { position: None }
    }

    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Some(Vec2::new(x, y)),
        }
    }

    /// Build from raw host coordinates, mapping the legacy sentinel to offscreen.
    pub fn from_host(x: f32, y: f32) -> Self {
        if !x.is_finite() || !y.is_finite() || Vec2::new(x, y) == Self::OFFSCREEN_SENTINEL {
            Self::offscreen()
        } else {
            Self::at(x, y)
        }
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}
