use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::{
    AmbientParams, AppearanceParams, AttractionMode, BloomParams, CountPolicy, FieldConfig,
    LinkStyle, MobilePolicy, MotionParams, PointerLinkStyle, PointerParams,
};
use super::error::ConfigError;
use crate::components::color::Rgba;

/// Named parameter sets. Picking a preset is picking a [`FieldConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Fast, multi-colored particles pulled by nudging their position, with
    /// lines drawn from the pointer to every particle in range.
    Constellation,
    /// Slow violet field with sine drift and velocity-based attraction.
    #[default]
    Wave,
    /// Wave motion plus particles that grow and turn cyan near the pointer.
    Bloom,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Constellation, Preset::Wave, Preset::Bloom];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Constellation => "constellation",
            Preset::Wave => "wave",
            Preset::Bloom => "bloom",
        }
    }

    pub fn config(self) -> FieldConfig {
        match self {
            Preset::Constellation => FieldConfig {
                fixed_dt: 1.0 / 60.0,
                count: CountPolicy {
                    base: 150,
                    per_width: Some(8.0),
                    max: 150,
                    mobile: None,
                },
                motion: MotionParams {
                    base_speed: 1.5,
                    drag: 1.0,
                },
                pointer: PointerParams {
                    range: 300.0,
                    strength: 1.5,
                    mode: AttractionMode::Displace,
                },
                appearance: AppearanceParams {
                    size_min: 1.0,
                    size_max: 3.5,
                    palette: vec![
                        Rgba::VIOLET.with_alpha(0.8),
                        Rgba::CYAN.with_alpha(0.8),
                        Rgba::PINK.with_alpha(0.6),
                    ],
                },
                links: LinkStyle {
                    distance: 100.0,
                    width: 0.5,
                    color: Rgba::VIOLET,
                    max_alpha: 0.2,
                    highlight: None,
                },
                pointer_links: Some(PointerLinkStyle {
                    width: 1.0,
                    color: Rgba::CYAN,
                    max_alpha: 0.4,
                    falloff: 300.0,
                }),
                bloom: None,
                ambient: AmbientParams::NONE,
            },
            Preset::Wave => FieldConfig {
                fixed_dt: 1.0 / 60.0,
                count: CountPolicy {
                    base: 180,
                    per_width: None,
                    max: 180,
                    mobile: Some(MobilePolicy {
                        max_width: 768.0,
                        count: 80,
                    }),
                },
                motion: MotionParams {
                    base_speed: 0.3,
                    drag: 0.95,
                },
                pointer: PointerParams {
                    range: 300.0,
                    strength: 0.08,
                    mode: AttractionMode::Velocity,
                },
                appearance: AppearanceParams {
                    size_min: 0.5,
                    size_max: 2.5,
                    palette: vec![Rgba::LAVENDER.with_alpha(0.6)],
                },
                links: LinkStyle {
                    distance: 100.0,
                    width: 0.5,
                    color: Rgba::LAVENDER,
                    max_alpha: 0.4,
                    highlight: None,
                },
                pointer_links: None,
                bloom: None,
                ambient: AmbientParams {
                    amplitude: 0.002,
                    frequency: 0.01,
                    time_scale: 1.0,
                },
            },
            Preset::Bloom => FieldConfig {
                fixed_dt: 1.0 / 60.0,
                count: CountPolicy {
                    base: 220,
                    per_width: Some(7.0),
                    max: 220,
                    mobile: Some(MobilePolicy {
                        max_width: 768.0,
                        count: 90,
                    }),
                },
                motion: MotionParams {
                    base_speed: 0.4,
                    drag: 0.94,
                },
                pointer: PointerParams {
                    range: 250.0,
                    strength: 0.1,
                    mode: AttractionMode::Velocity,
                },
                appearance: AppearanceParams {
                    size_min: 0.8,
                    size_max: 2.4,
                    palette: vec![
                        Rgba::LAVENDER.with_alpha(0.7),
                        Rgba::VIOLET.with_alpha(0.7),
                    ],
                },
                links: LinkStyle {
                    distance: 120.0,
                    width: 0.6,
                    color: Rgba::LAVENDER,
                    max_alpha: 0.35,
                    highlight: Some(Rgba::CYAN),
                },
                pointer_links: None,
                bloom: Some(BloomParams {
                    size_scale: 2.5,
                    color: Rgba::CYAN.with_alpha(0.95),
                    smoothing: 0.9,
                }),
                ambient: AmbientParams {
                    amplitude: 0.0015,
                    frequency: 0.008,
                    time_scale: 0.8,
                },
            },
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("wave".parse::<Preset>().unwrap(), Preset::Wave);
        assert_eq!(" Bloom ".parse::<Preset>().unwrap(), Preset::Bloom);
        assert_eq!(
            "constellation".parse::<Preset>().unwrap(),
            Preset::Constellation
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "sparkle".parse::<Preset>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPreset(ref n) if n == "sparkle"));
    }

    #[test]
    fn display_matches_parse() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>().unwrap(), preset);
        }
    }

    #[test]
    fn only_constellation_links_to_pointer() {
        assert!(Preset::Constellation.config().pointer_links.is_some());
        assert!(Preset::Wave.config().pointer_links.is_none());
        assert!(Preset::Bloom.config().pointer_links.is_none());
    }

    #[test]
    fn default_preset_is_wave() {
        assert_eq!(Preset::default(), Preset::Wave);
        assert_eq!(FieldConfig::default(), Preset::Wave.config());
    }
}
