use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::preset::Preset;
use crate::components::color::Rgba;

/// Hard ceiling on the particle count. Connections are an O(n²) scan per
/// frame, so every count policy is clamped to this value.
pub const MAX_PARTICLES: usize = 220;

/// Largest ambient velocity kick per step. Above this the drift outruns any
/// drag and particles streak across the viewport.
pub const MAX_AMBIENT_AMPLITUDE: f32 = 1.0;

/// Complete description of one particle field.
///
/// Missing JSON fields fall back to the `wave` preset, so a config document
/// only has to list what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Fixed simulation timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    pub count: CountPolicy,
    pub motion: MotionParams,
    pub pointer: PointerParams,
    pub appearance: AppearanceParams,
    pub links: LinkStyle,
    /// Lines from the pointer to every particle in range.
    pub pointer_links: Option<PointerLinkStyle>,
    /// Size/color amplification near the pointer.
    pub bloom: Option<BloomParams>,
    pub ambient: AmbientParams,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Preset::Wave.config()
    }
}

impl FieldConfig {
    /// Configuration for a named preset.
    pub fn preset(preset: Preset) -> Self {
        preset.config()
    }

    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is inside the range the simulation can handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_dt > 0.0) {
            return Err(ConfigError::invalid(
                "fixed_dt",
                format!("must be positive, got {}", self.fixed_dt),
            ));
        }
        if self.count.max > MAX_PARTICLES || self.count.base > MAX_PARTICLES {
            return Err(ConfigError::invalid(
                "count",
                format!("must not exceed {} particles", MAX_PARTICLES),
            ));
        }
        if let Some(px) = self.count.per_width {
            if !(px > 0.0) {
                return Err(ConfigError::invalid(
                    "count.per_width",
                    format!("must be positive, got {}", px),
                ));
            }
        }
        if let Some(mobile) = &self.count.mobile {
            if mobile.count > MAX_PARTICLES {
                return Err(ConfigError::invalid(
                    "count.mobile.count",
                    format!("must not exceed {} particles", MAX_PARTICLES),
                ));
            }
        }
        if !(self.motion.drag > 0.0 && self.motion.drag <= 1.0) {
            return Err(ConfigError::invalid(
                "motion.drag",
                format!("must be in (0, 1], got {}", self.motion.drag),
            ));
        }
        if !(self.motion.base_speed >= 0.0) {
            return Err(ConfigError::invalid(
                "motion.base_speed",
                format!("must not be negative, got {}", self.motion.base_speed),
            ));
        }
        if !(self.pointer.range > 0.0) {
            return Err(ConfigError::invalid(
                "pointer.range",
                format!("must be positive, got {}", self.pointer.range),
            ));
        }
        if !(self.pointer.strength >= 0.0) {
            return Err(ConfigError::invalid(
                "pointer.strength",
                format!("must not be negative, got {}", self.pointer.strength),
            ));
        }
        let a = &self.appearance;
        if !(a.size_min > 0.0 && a.size_min <= a.size_max) {
            return Err(ConfigError::invalid(
                "appearance.size_min",
                format!("need 0 < size_min <= size_max, got {}..{}", a.size_min, a.size_max),
            ));
        }
        if a.palette.is_empty() {
            return Err(ConfigError::invalid("appearance.palette", "must list at least one color"));
        }
        if !(self.links.distance > 0.0) {
            return Err(ConfigError::invalid(
                "links.distance",
                format!("must be positive, got {}", self.links.distance),
            ));
        }
        let links = &self.links;
        if !(links.width >= 0.0 && links.width.is_finite()) {
            return Err(ConfigError::invalid(
                "links.width",
                format!("must be finite and not negative, got {}", links.width),
            ));
        }
        if !(0.0..=1.0).contains(&links.max_alpha) {
            return Err(ConfigError::invalid(
                "links.max_alpha",
                format!("must be in [0, 1], got {}", links.max_alpha),
            ));
        }
        if let Some(style) = &self.pointer_links {
            if !(style.width >= 0.0 && style.width.is_finite()) {
                return Err(ConfigError::invalid(
                    "pointer_links.width",
                    format!("must be finite and not negative, got {}", style.width),
                ));
            }
            if !(0.0..=1.0).contains(&style.max_alpha) {
                return Err(ConfigError::invalid(
                    "pointer_links.max_alpha",
                    format!("must be in [0, 1], got {}", style.max_alpha),
                ));
            }
            if !(style.falloff > 0.0 && style.falloff.is_finite()) {
                return Err(ConfigError::invalid(
                    "pointer_links.falloff",
                    format!("must be positive, got {}", style.falloff),
                ));
            }
        }
        let ambient = &self.ambient;
        if !(0.0..=MAX_AMBIENT_AMPLITUDE).contains(&ambient.amplitude) {
            return Err(ConfigError::invalid(
                "ambient.amplitude",
                format!("must be in [0, {}], got {}", MAX_AMBIENT_AMPLITUDE, ambient.amplitude),
            ));
        }
        if !(ambient.frequency.is_finite() && ambient.time_scale.is_finite()) {
            return Err(ConfigError::invalid(
                "ambient",
                format!(
                    "frequency and time_scale must be finite, got {} and {}",
                    ambient.frequency, ambient.time_scale
                ),
            ));
        }
        if let Some(bloom) = &self.bloom {
            if !(0.0..1.0).contains(&bloom.smoothing) {
                return Err(ConfigError::invalid(
                    "bloom.smoothing",
                    format!("must be in [0, 1), got {}", bloom.smoothing),
                ));
            }
            if !(bloom.size_scale >= 1.0 && bloom.size_scale.is_finite()) {
                return Err(ConfigError::invalid(
                    "bloom.size_scale",
                    format!("must be at least 1.0, got {}", bloom.size_scale),
                ));
            }
        }
        Ok(())
    }
}

/// How many particles a viewport gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountPolicy {
    /// Count used when `per_width` is not set.
    pub base: usize,
    /// One particle per this many horizontal pixels.
    pub per_width: Option<f32>,
    /// Upper bound for the width-derived count.
    pub max: usize,
    /// Fixed count for narrow viewports.
    pub mobile: Option<MobilePolicy>,
}

/// Narrow-viewport override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobilePolicy {
    /// Viewports strictly narrower than this use `count`.
    pub max_width: f32,
    pub count: usize,
}

impl Default for CountPolicy {
    fn default() -> Self {
        Preset::Wave.config().count
    }
}

impl CountPolicy {
    /// Particle count for a viewport of the given width.
    pub fn count_for_width(&self, width: f32) -> usize {
        if !(width > 0.0) {
            return 0;
        }
        let count = match &self.mobile {
            Some(mobile) if width < mobile.max_width => mobile.count,
            _ => {
                let wanted = match self.per_width {
                    Some(px) if px > 0.0 => (width / px).floor() as usize,
                    _ => self.base,
                };
                wanted.min(self.max)
            }
        };
        count.min(MAX_PARTICLES)
    }
}

/// Whether pointer attraction accelerates particles or nudges them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttractionMode {
    /// Force is added to velocity and decays under drag.
    #[default]
    Velocity,
    /// Force is added to position for this step only.
    Displace,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Spawn velocity components are uniform in `[-base_speed/2, base_speed/2)`.
    pub base_speed: f32,
    /// Per-step velocity multiplier. 1.0 disables damping.
    pub drag: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Preset::Wave.config().motion
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerParams {
    /// Radius of pointer influence in pixels.
    pub range: f32,
    /// Force at zero distance; falls off linearly to 0 at `range`.
    pub strength: f32,
    pub mode: AttractionMode,
}

impl Default for PointerParams {
    fn default() -> Self {
        Preset::Wave.config().pointer
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceParams {
    pub size_min: f32,
    pub size_max: f32,
    /// Each particle picks one color uniformly.
    pub palette: Vec<Rgba>,
}

impl Default for AppearanceParams {
    fn default() -> Self {
        Preset::Wave.config().appearance
    }
}

/// Particle-to-particle connection lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
    /// Pairs closer than this are connected.
    pub distance: f32,
    pub width: f32,
    pub color: Rgba,
    /// Alpha of a zero-length line; falls off linearly to 0 at `distance`.
    pub max_alpha: f32,
    /// Lines near the pointer blend toward this color.
    pub highlight: Option<Rgba>,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Preset::Wave.config().links
    }
}

/// Lines drawn from the pointer to nearby particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerLinkStyle {
    pub width: f32,
    pub color: Rgba,
    /// Alpha of a zero-length line.
    pub max_alpha: f32,
    /// Alpha drops by 1.0 per `falloff` pixels; lines fade out at
    /// `max_alpha * falloff`.
    pub falloff: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloomParams {
    /// Size multiplier at zero distance from the pointer.
    pub size_scale: f32,
    /// Color approached at zero distance from the pointer.
    pub color: Rgba,
    /// Retention factor of the exponential smoothing, in [0, 1).
    pub smoothing: f32,
}

/// Sine/cosine drift applied every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientParams {
    /// Velocity added per step at the wave crest. 0.0 disables drift.
    pub amplitude: f32,
    /// Spatial frequency in radians per pixel.
    pub frequency: f32,
    /// Temporal frequency in radians per second.
    pub time_scale: f32,
}

impl Default for AmbientParams {
    fn default() -> Self {
        Preset::Wave.config().ambient
    }
}

impl AmbientParams {
    pub const NONE: Self = Self {
        amplitude: 0.0,
        frequency: 0.01,
        time_scale: 1.0,
    };
}
