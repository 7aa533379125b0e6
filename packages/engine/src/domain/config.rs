//! FireConfig - recognized options for a fire grid
//!
//! Loaded from camelCase JSON (see `presets/classic.json`). Every field has
//! a default, so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};

use super::palette::{Palette, Rgb, FIRE_STOPS};
use crate::core::random::DEFAULT_SEED;
use crate::systems::WindShift;

/// Largest accepted grid edge
pub const MAX_GRID_DIM: u32 = 4096;
/// Largest accepted decay range `D`
pub const MAX_DECAY_RANGE: u32 = 16;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FireConfig {
    pub width: u32,
    pub height: u32,
    /// Decay is drawn uniformly from `[0, decay_range)` per cell per step
    pub decay_range: u32,
    pub palette: PaletteSpec,
    pub wind_enabled: bool,
    /// Max per-frame change of the wind random walk
    pub wind_step: f32,
    /// `"floor"` (default) or `"stochastic"` column shift
    pub wind_shift: WindShift,
    pub inject_radius: f32,
    /// Heat added at the brush center; `None` means the hottest palette level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inject_intensity: Option<f32>,
    pub inject_scale: f32,
    /// Slider position in percent, seeds the source row
    pub intensity: f32,
    pub rng_seed: u32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 168,
            decay_range: 3,
            palette: PaletteSpec::default(),
            wind_enabled: false,
            wind_step: 0.025,
            wind_shift: WindShift::Floor,
            inject_radius: 6.0,
            inject_intensity: None,
            inject_scale: 1.0,
            intensity: 50.0,
            rng_seed: DEFAULT_SEED,
        }
    }
}

impl FireConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: FireConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.width > MAX_GRID_DIM {
            return Err(format!("width must be 1..={}, got {}", MAX_GRID_DIM, self.width));
        }
        if self.height == 0 || self.height > MAX_GRID_DIM {
            return Err(format!("height must be 1..={}, got {}", MAX_GRID_DIM, self.height));
        }
        if self.decay_range == 0 || self.decay_range > MAX_DECAY_RANGE {
            return Err(format!(
                "decayRange must be 1..={}, got {}",
                MAX_DECAY_RANGE, self.decay_range
            ));
        }
        if !self.wind_step.is_finite() || !(0.0..=1.0).contains(&self.wind_step) {
            return Err(format!("windStep must be within 0..=1, got {}", self.wind_step));
        }
        if !self.inject_radius.is_finite() || self.inject_radius < 0.0 {
            return Err(format!("injectRadius must be >= 0, got {}", self.inject_radius));
        }
        if !self.inject_scale.is_finite() || self.inject_scale < 0.0 {
            return Err(format!("injectScale must be >= 0, got {}", self.inject_scale));
        }
        if let Some(v) = self.inject_intensity {
            if !v.is_finite() {
                return Err("injectIntensity must be finite".to_string());
            }
        }
        if !self.intensity.is_finite() {
            return Err("intensity must be finite".to_string());
        }
        self.palette.build().map(|_| ())
    }
}

/// How the palette is described in configuration
///
/// - `"classic"`
/// - `{ "colors": [[r, g, b], ...] }`
/// - `{ "gradient": { "stops": [[r, g, b], ...], "size": 40 } }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteSpec {
    Named(String),
    Colors { colors: Vec<Rgb> },
    Gradient { gradient: GradientSpec },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientSpec {
    #[serde(default = "default_stops")]
    pub stops: Vec<Rgb>,
    pub size: usize,
}

fn default_stops() -> Vec<Rgb> {
    FIRE_STOPS.to_vec()
}

impl Default for PaletteSpec {
    fn default() -> Self {
        PaletteSpec::Named("classic".to_string())
    }
}

impl PaletteSpec {
    pub fn build(&self) -> Result<Palette, String> {
        match self {
            PaletteSpec::Named(name) => match name.as_str() {
                "classic" => Ok(Palette::classic()),
                _ => Err(format!("unknown palette: {}", name)),
            },
            PaletteSpec::Colors { colors } => Palette::new(colors.clone()),
            PaletteSpec::Gradient { gradient } => Palette::gradient(&gradient.stops, gradient.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = FireConfig::from_json("{}").unwrap();
        assert_eq!(config, FireConfig::default());
    }

    #[test]
    fn parses_camel_case_fields() {
        let config = FireConfig::from_json(
            r#"{ "width": 80, "height": 50, "decayRange": 4, "windEnabled": true,
                 "windStep": 0.05, "injectRadius": 3.5, "injectIntensity": 20, "rngSeed": 7 }"#,
        )
        .unwrap();
        assert_eq!((config.width, config.height), (80, 50));
        assert_eq!(config.decay_range, 4);
        assert!(config.wind_enabled);
        assert_eq!(config.inject_intensity, Some(20.0));
        assert_eq!(config.rng_seed, 7);
        assert_eq!(config.wind_shift, WindShift::Floor);
    }

    #[test]
    fn wind_shift_is_opt_in() {
        let config = FireConfig::from_json(r#"{ "windShift": "stochastic" }"#).unwrap();
        assert_eq!(config.wind_shift, WindShift::Stochastic);
        assert!(FireConfig::from_json(r#"{ "windShift": "gusty" }"#).is_err());
        assert!(FireConfig::default().to_json().contains(r#""windShift":"floor""#));
    }

    #[test]
    fn palette_variants() {
        let colors = FireConfig::from_json(r#"{ "palette": { "colors": [[0,0,0],[255,255,255]] } }"#).unwrap();
        assert_eq!(colors.palette.build().unwrap().len(), 2);

        let gradient = FireConfig::from_json(r#"{ "palette": { "gradient": { "size": 40 } } }"#).unwrap();
        assert_eq!(gradient.palette.build().unwrap().len(), 40);

        let err = FireConfig::from_json(r#"{ "palette": "plasma" }"#).unwrap_err();
        assert!(err.contains("unknown palette"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(FireConfig::from_json(r#"{ "width": 0 }"#).is_err());
        assert!(FireConfig::from_json(r#"{ "height": 5000 }"#).is_err());
        assert!(FireConfig::from_json(r#"{ "decayRange": 0 }"#).is_err());
        assert!(FireConfig::from_json(r#"{ "windStep": 2.0 }"#).is_err());
        assert!(FireConfig::from_json(r#"{ "injectRadius": -1 }"#).is_err());
        assert!(FireConfig::from_json(r#"{ "palette": { "colors": [[1,2,3]] } }"#).is_err());
        assert!(FireConfig::from_json("not json").is_err());
    }

    #[test]
    fn json_round_trip_keeps_settings() {
        let mut config = FireConfig::with_size(64, 32);
        config.wind_enabled = true;
        let back = FireConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
