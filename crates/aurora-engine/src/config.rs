//! Mount configuration
//!
//! The host hands the engine a JSON object with camelCase keys. Every key is
//! optional: an absent key takes its default, it is never an error. Values
//! that are present but nonsensical are rejected by [`EngineConfig::validate`].

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::ConfigError;
use crate::math::Size;
use crate::render::GradientStop;

/// Which outline generator draws the field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Deformable radial blobs drifting across the surface
    #[default]
    Blobs,
    /// Horizontal wave bands, one per blob index
    Bands,
}

/// Parameters for [`Style::Bands`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BandConfig {
    /// Horizontal sampling step in pixels
    pub step: f64,
    /// Noise x offset between consecutive layers
    pub layer_offset: f64,
    /// Horizontal scroll rate of the noise, per unit of scaled time
    pub horizontal_drift: f64,
    /// Rate along the second noise axis, per unit of scaled time
    pub vertical_drift: f64,
    /// Wave amplitude as a fraction of surface height
    pub amplitude: f64,
    /// Extra amplitude multiplier for the bottom edge
    pub bottom_amplitude: f64,
    /// Upward shift of the top edge per layer, in pixels
    pub top_shift: f64,
    /// Downward shift of the bottom edge per layer, in pixels
    pub bottom_shift: f64,
    /// Vertical gradient stops, one list per layer (cycled)
    pub gradients: Vec<Vec<GradientStop>>,
}

impl Default for BandConfig {
    fn default() -> Self {
        let deep = Rgba::new(32, 20, 60, 0.1);
        let stop = |offset: f64, r: u8, g: u8, b: u8, a: f32| GradientStop::new(offset, Rgba::new(r, g, b, a));

        Self {
            step: 5.0,
            layer_offset: 80.0,
            horizontal_drift: 0.5,
            vertical_drift: 0.3,
            amplitude: 0.4,
            bottom_amplitude: 1.5,
            top_shift: 10.0,
            bottom_shift: 20.0,
            gradients: vec![
                vec![
                    stop(0.0, 80, 180, 255, 0.7),
                    stop(0.35, 120, 255, 210, 0.25),
                    stop(0.7, 180, 255, 240, 0.13),
                    GradientStop::new(1.0, deep),
                ],
                vec![
                    stop(0.0, 90, 120, 255, 0.6),
                    stop(0.3, 160, 120, 255, 0.18),
                    stop(0.65, 200, 180, 255, 0.08),
                    GradientStop::new(1.0, deep),
                ],
                vec![
                    stop(0.0, 110, 220, 200, 0.5),
                    stop(0.45, 120, 255, 210, 0.22),
                    stop(0.8, 180, 120, 255, 0.12),
                    GradientStop::new(1.0, deep),
                ],
                vec![
                    stop(0.0, 60, 80, 180, 0.5),
                    stop(0.5, 120, 255, 210, 0.13),
                    stop(0.8, 120, 120, 255, 0.18),
                    GradientStop::new(1.0, deep),
                ],
                vec![
                    stop(0.0, 120, 180, 255, 0.45),
                    stop(0.5, 180, 255, 240, 0.09),
                    stop(0.8, 200, 180, 255, 0.13),
                    GradientStop::new(1.0, deep),
                ],
            ],
        }
    }
}

/// Engine configuration supplied on mount
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Palette, assigned to blobs by index modulo length
    pub blob_colors: Vec<Rgba>,
    /// Number of blobs (or band layers)
    pub num_blobs: usize,
    /// Smallest radius as a fraction of the shorter surface side
    pub min_radius_ratio: f64,
    /// Largest radius as a fraction of the shorter surface side
    pub max_radius_ratio: f64,
    /// Spatial noise frequency (used along x by the wave bands)
    pub noise_scale: f64,
    /// Global time multiplier
    pub animation_speed: f64,
    /// Radius of the circle walked through noise space when deforming
    pub shape_noise_scale: f64,
    /// Outline resolution
    pub num_points: usize,
    /// Clock advance per tick
    pub time_step: f64,
    /// Fraction of the sampled displacement applied per tick
    pub drift_gain: f64,
    /// Slows shape change relative to drift
    pub shape_time_damping: f64,
    /// Gradient radius as a multiple of the blob radius
    pub gradient_extent: f64,
    /// Gradient opacity at the blob centre
    pub center_alpha: f32,
    /// Opaque fill painted after each clear
    pub background: Option<Rgba>,
    pub style: Style,
    pub bands: BandConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            blob_colors: vec![
                Rgba::new(30, 0, 80, 0.5),
                Rgba::new(60, 0, 120, 0.5),
                Rgba::new(0, 50, 150, 0.6),
                Rgba::new(25, 68, 124, 0.6),
                Rgba::new(0, 100, 200, 0.7),
                Rgba::new(0, 150, 255, 0.8),
                Rgba::new(0, 200, 255, 0.9),
                Rgba::new(28, 48, 94, 0.7),
                Rgba::new(0, 255, 255, 0.4),
            ],
            num_blobs: 7,
            min_radius_ratio: 0.2,
            max_radius_ratio: 0.35,
            noise_scale: 0.00008,
            animation_speed: 0.000001,
            shape_noise_scale: 0.15,
            num_points: 80,
            time_step: 1.0,
            drift_gain: 0.5,
            shape_time_damping: 0.1,
            gradient_extent: 1.8,
            center_alpha: 0.8,
            background: None,
            style: Style::Blobs,
            bands: BandConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Preset for the five-layer aurora wave bands
    pub fn wave_bands() -> Self {
        Self {
            num_blobs: 5,
            noise_scale: 0.0012,
            animation_speed: 1.0,
            time_step: 0.00025,
            background: Some(Rgba::rgb(2, 1, 15)),
            style: Style::Bands,
            ..Self::default()
        }
    }

    /// Parse a JSON mount configuration and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_blobs == 0 {
            return Err(ConfigError::NoBlobs);
        }
        if self.blob_colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }

        let (min, max) = (self.min_radius_ratio, self.max_radius_ratio);
        if !(0.0 <= min && min < max && max <= 1.0) {
            return Err(ConfigError::RadiusRatios { min, max });
        }

        for (name, value) in [
            ("noiseScale", self.noise_scale),
            ("animationSpeed", self.animation_speed),
            ("shapeNoiseScale", self.shape_noise_scale),
            ("timeStep", self.time_step),
            ("gradientExtent", self.gradient_extent),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.num_points < 3 {
            return Err(ConfigError::TooFewPoints(self.num_points));
        }

        if self.style == Style::Bands {
            if self.bands.gradients.is_empty() {
                return Err(ConfigError::NoBandGradients);
            }
            let step = self.bands.step;
            if !(step.is_finite() && step > 0.0) {
                return Err(ConfigError::NotPositive {
                    name: "bands.step",
                    value: step,
                });
            }
        }

        Ok(())
    }

    /// Radius of a blob with the given factor on a surface of `width x height`
    #[inline]
    pub fn radius_for(&self, width: f64, height: f64, radius_factor: f64) -> f64 {
        let span = self.max_radius_ratio - self.min_radius_ratio;
        Size::new(width, height).min_side() * (self.min_radius_ratio + radius_factor * span)
    }

    /// Palette colour for a blob index
    #[inline]
    pub fn color_for(&self, index: usize) -> Rgba {
        self.blob_colors[index % self.blob_colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_blobs, 7);
        assert_eq!(config.blob_colors.len(), 9);
        assert_eq!(config.num_points, 80);
        assert_eq!(config.style, Style::Blobs);
    }

    #[test]
    fn test_wave_bands_preset_is_valid() {
        let config = EngineConfig::wave_bands();
        assert!(config.validate().is_ok());
        assert_eq!(config.num_blobs, 5);
        assert_eq!(config.style, Style::Bands);
        assert_eq!(config.bands.gradients.len(), 5);
        assert_eq!(config.background, Some(Rgba::rgb(2, 1, 15)));
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_only_given_fields() {
        let config = EngineConfig::from_json(
            r##"{
                "numBlobs": 3,
                "minRadiusRatio": 0.1,
                "blobColors": ["rgba(255, 0, 0, 0.5)", "#00ff00"],
                "style": "bands",
                "bands": { "amplitude": 0.25 }
            }"##,
        )
        .unwrap();

        assert_eq!(config.num_blobs, 3);
        assert!((config.min_radius_ratio - 0.1).abs() < 1e-12);
        assert!((config.max_radius_ratio - 0.35).abs() < 1e-12);
        assert_eq!(config.blob_colors[1], Rgba::rgb(0, 255, 0));
        assert_eq!(config.style, Style::Bands);
        assert!((config.bands.amplitude - 0.25).abs() < 1e-12);
        assert!((config.bands.step - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_json(r#"{"numBlobs": 0}"#),
            Err(ConfigError::NoBlobs)
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"blobColors": []}"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"minRadiusRatio": 0.5, "maxRadiusRatio": 0.4}"#),
            Err(ConfigError::RadiusRatios { .. })
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"animationSpeed": 0}"#),
            Err(ConfigError::NotPositive { name: "animationSpeed", .. })
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"numPoints": 2}"#),
            Err(ConfigError::TooFewPoints(2))
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{"blobColors": ["chartreuse"]}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json(r##"{"blobColors": ["#é1"]}"##),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_radius_for_uses_shorter_side() {
        let config = EngineConfig::default();
        assert!((config.radius_for(400.0, 300.0, 0.0) - 60.0).abs() < 1e-9);
        assert!((config.radius_for(400.0, 300.0, 1.0) - 105.0).abs() < 1e-9);
        assert!((config.radius_for(300.0, 400.0, 0.5) - 82.5).abs() < 1e-9);
    }

    #[test]
    fn test_color_for_cycles_palette() {
        let config = EngineConfig {
            blob_colors: vec![Rgba::rgb(1, 1, 1), Rgba::rgb(2, 2, 2)],
            ..EngineConfig::default()
        };
        assert_eq!(config.color_for(0), Rgba::rgb(1, 1, 1));
        assert_eq!(config.color_for(3), Rgba::rgb(2, 2, 2));
    }
}
