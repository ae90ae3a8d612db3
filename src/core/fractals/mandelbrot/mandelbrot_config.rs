//! Render settings threaded explicitly into the iteration policy and the
//! renderer. Serializes to the JSON settings file read by the command-line
//! driver; every field falls back to its default when absent.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{
    actions::build_colour_lut::build_colour_lut::build_colour_lut,
    data::{
        colour_lut::{ColourLut, ColourLutError, DEFAULT_LUT_SIZE},
        gradient::Gradient,
        resolution::Resolution,
        viewport::{Viewport, REFERENCE_SPAN},
    },
    fractals::mandelbrot::{
        errors::MandelbrotError,
        iteration_policy::{compute_max_iterations, IterationPolicyError},
        params::RenderRequest,
        quality::{Quality, QualityLevel, DEFAULT_MIN_ITERATIONS},
    },
};

const DEFAULT_ESCAPE_RADIUS: f64 = 4.0;
const DEFAULT_CUSTOM_MULTIPLIER: f64 = 1.0;

fn default_escape_radius() -> f64 {
    DEFAULT_ESCAPE_RADIUS
}

fn default_custom_min_iterations() -> u32 {
    DEFAULT_MIN_ITERATIONS
}

fn default_custom_multiplier() -> f64 {
    DEFAULT_CUSTOM_MULTIPLIER
}

fn default_lut_size() -> usize {
    DEFAULT_LUT_SIZE
}

#[derive(Debug)]
pub enum RenderSettingsError {
    Policy(IterationPolicyError),
    Request(MandelbrotError),
    Lut(ColourLutError),
}

impl fmt::Display for RenderSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Policy(err) => write!(f, "iteration policy error: {}", err),
            Self::Request(err) => write!(f, "render request error: {}", err),
            Self::Lut(err) => write!(f, "colour table error: {}", err),
        }
    }
}

impl Error for RenderSettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Policy(err) => Some(err),
            Self::Request(err) => Some(err),
            Self::Lut(err) => Some(err),
        }
    }
}

impl From<IterationPolicyError> for RenderSettingsError {
    fn from(err: IterationPolicyError) -> Self {
        Self::Policy(err)
    }
}

impl From<MandelbrotError> for RenderSettingsError {
    fn from(err: MandelbrotError) -> Self {
        Self::Request(err)
    }
}

impl From<ColourLutError> for RenderSettingsError {
    fn from(err: ColourLutError) -> Self {
        Self::Lut(err)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    #[serde(default = "default_escape_radius")]
    pub escape_radius: f64,
    #[serde(default)]
    pub quality: QualityLevel,
    /// Only read when `quality` is `Custom`.
    #[serde(default = "default_custom_min_iterations", alias = "custom_min_iter")]
    pub custom_min_iterations: u32,
    /// Only read when `quality` is `Custom`. Relative to the 50 iterations
    /// per octave base, like the presets: 2.0 is `High`, not 50.0.
    #[serde(default = "default_custom_multiplier")]
    pub custom_multiplier: f64,
    #[serde(default = "default_lut_size")]
    pub lut_size: usize,
    #[serde(default = "Gradient::default_palette")]
    pub gradient: Gradient,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            quality: QualityLevel::default(),
            custom_min_iterations: DEFAULT_MIN_ITERATIONS,
            custom_multiplier: DEFAULT_CUSTOM_MULTIPLIER,
            lut_size: DEFAULT_LUT_SIZE,
            gradient: Gradient::default_palette(),
        }
    }
}

impl RenderSettings {
    #[must_use]
    pub fn quality(&self) -> Quality {
        match self.quality {
            QualityLevel::Low => Quality::Low,
            QualityLevel::Medium => Quality::Medium,
            QualityLevel::High => Quality::High,
            QualityLevel::Ultra => Quality::Ultra,
            QualityLevel::Custom => Quality::Custom {
                min_iterations: self.custom_min_iterations,
                multiplier: self.custom_multiplier,
            },
        }
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality.level();

        if let Quality::Custom { min_iterations, multiplier } = quality {
            self.custom_min_iterations = min_iterations;
            self.custom_multiplier = multiplier;
        }
    }

    /// Rejects settings no render could use: a non-positive escape radius,
    /// an empty colour table or custom quality values the policy refuses.
    pub fn validate(&self) -> Result<(), RenderSettingsError> {
        if !self.escape_radius.is_finite() || self.escape_radius <= 0.0 {
            return Err(RenderSettingsError::Request(
                MandelbrotError::InvalidEscapeRadiusError { escape_radius: self.escape_radius },
            ));
        }

        if self.lut_size == 0 {
            return Err(RenderSettingsError::Lut(ColourLutError::ZeroSize));
        }

        compute_max_iterations(REFERENCE_SPAN, self.quality())?;

        Ok(())
    }

    pub fn max_iterations_for(&self, viewport: &Viewport) -> Result<u32, IterationPolicyError> {
        compute_max_iterations(viewport.zoom_span(), self.quality())
    }

    pub fn build_lut(&self) -> Result<ColourLut, ColourLutError> {
        build_colour_lut(&self.gradient, self.lut_size)
    }

    /// Budget from the iteration policy plus this configuration's escape
    /// radius, for one frame of `viewport` at `resolution`.
    pub fn build_render_request(
        &self,
        viewport: Viewport,
        resolution: Resolution,
    ) -> Result<RenderRequest, RenderSettingsError> {
        let max_iterations = self.max_iterations_for(&viewport)?;

        Ok(RenderRequest::with_resolution(
            viewport,
            resolution,
            max_iterations,
            self.escape_radius,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour_lut::MappingMode;

    #[test]
    fn test_defaults() {
        let settings = RenderSettings::default();

        assert_eq!(settings.escape_radius, 4.0);
        assert_eq!(settings.quality(), Quality::High);
        assert_eq!(settings.lut_size, 2048);
        assert_eq!(settings.gradient, Gradient::default_palette());
    }

    #[test]
    fn test_custom_quality_reads_custom_fields() {
        let settings = RenderSettings {
            quality: QualityLevel::Custom,
            custom_min_iterations: 500,
            custom_multiplier: 3.0,
            ..RenderSettings::default()
        };

        assert_eq!(
            settings.quality(),
            Quality::Custom { min_iterations: 500, multiplier: 3.0 }
        );
    }

    #[test]
    fn test_set_quality_preset_keeps_custom_fields() {
        let mut settings = RenderSettings::default();
        settings.set_quality(Quality::Custom { min_iterations: 120, multiplier: 2.5 });
        settings.set_quality(Quality::Low);

        assert_eq!(settings.quality, QualityLevel::Low);
        assert_eq!(settings.custom_min_iterations, 120);
        assert_eq!(settings.custom_multiplier, 2.5);
    }

    #[test]
    fn test_build_render_request_uses_policy_budget() {
        let settings = RenderSettings::default();
        let resolution = Resolution::new(80, 60).unwrap();
        let deep = Viewport::new(-0.75, -0.75 + 3.5 / 1024.0, 0.1, 0.1 + 2.5 / 1024.0).unwrap();

        let full = settings.build_render_request(Viewport::default(), resolution).unwrap();
        let zoomed = settings.build_render_request(deep, resolution).unwrap();

        assert_eq!(full.max_iterations(), 64);
        assert!(zoomed.max_iterations() > 900 && zoomed.max_iterations() <= 1000);
        assert_eq!(zoomed.escape_radius(), 4.0);
    }

    #[test]
    fn test_build_render_request_rejects_bad_escape_radius() {
        let settings = RenderSettings { escape_radius: 0.0, ..RenderSettings::default() };
        let resolution = Resolution::new(8, 8).unwrap();

        assert!(matches!(
            settings.build_render_request(Viewport::default(), resolution),
            Err(RenderSettingsError::Request(MandelbrotError::InvalidEscapeRadiusError { .. }))
        ));
    }

    #[test]
    fn test_validate() {
        assert!(RenderSettings::default().validate().is_ok());

        let bad_radius = RenderSettings { escape_radius: f64::NAN, ..RenderSettings::default() };
        assert!(matches!(bad_radius.validate(), Err(RenderSettingsError::Request(_))));

        let empty_lut = RenderSettings { lut_size: 0, ..RenderSettings::default() };
        assert!(matches!(
            empty_lut.validate(),
            Err(RenderSettingsError::Lut(ColourLutError::ZeroSize))
        ));

        let bad_custom = RenderSettings {
            quality: QualityLevel::Custom,
            custom_multiplier: -1.0,
            ..RenderSettings::default()
        };
        assert!(matches!(bad_custom.validate(), Err(RenderSettingsError::Policy(_))));

        // custom fields are ignored for presets
        let preset = RenderSettings { custom_min_iterations: 0, ..RenderSettings::default() };
        assert!(preset.validate().is_ok());
    }

    #[test]
    fn test_build_lut_honours_size() {
        let settings = RenderSettings { lut_size: 16, ..RenderSettings::default() };
        let lut = settings.build_lut().unwrap();

        assert_eq!(lut.len(), 16);
        assert_eq!(lut.mode(), MappingMode::Interpolated);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: RenderSettings = serde_json::from_str(r#"{"quality": "Ultra"}"#).unwrap();

        assert_eq!(settings.quality(), Quality::Ultra);
        assert_eq!(settings.escape_radius, 4.0);
        assert_eq!(settings.gradient, Gradient::default_palette());
    }

    #[test]
    fn test_custom_min_iter_key_is_accepted() {
        let json = r#"{"quality": "Custom", "custom_min_iter": 200, "custom_multiplier": 1.5}"#;
        let settings: RenderSettings = serde_json::from_str(json).unwrap();

        assert_eq!(
            settings.quality(),
            Quality::Custom { min_iterations: 200, multiplier: 1.5 }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let settings = RenderSettings {
            escape_radius: 2.5,
            quality: QualityLevel::Custom,
            custom_min_iterations: 90,
            custom_multiplier: 1.25,
            lut_size: 512,
            gradient: Gradient::default(),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: RenderSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(back, settings);
    }
}
