use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MIN_ITERATIONS: u32 = 64;

/// Named quality setting as stored in the render settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QualityLevel {
    Low,
    Medium,
    #[default]
    High,
    Ultra,
    Custom,
}

impl QualityLevel {
    pub const ALL: &'static [Self] = &[
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Ultra,
        Self::Custom,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Ultra => "Ultra",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQualityLevelError {
    input: String,
}

impl fmt::Display for ParseQualityLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown quality {:?}, expected one of low, medium, high, ultra, custom",
            self.input
        )
    }
}

impl Error for ParseQualityLevelError {}

impl FromStr for QualityLevel {
    type Err = ParseQualityLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseQualityLevelError { input: s.to_string() })
    }
}

/// Resolved quality: a preset multiplier, or a user floor and multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quality {
    Low,
    Medium,
    High,
    Ultra,
    Custom { min_iterations: u32, multiplier: f64 },
}

impl Quality {
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Low => 0.5,
            Self::Medium => 1.0,
            Self::High => 2.0,
            Self::Ultra => 4.0,
            Self::Custom { multiplier, .. } => *multiplier,
        }
    }

    #[must_use]
    pub fn min_iterations(&self) -> u32 {
        match self {
            Self::Custom { min_iterations, .. } => *min_iterations,
            _ => DEFAULT_MIN_ITERATIONS,
        }
    }

    #[must_use]
    pub fn level(&self) -> QualityLevel {
        match self {
            Self::Low => QualityLevel::Low,
            Self::Medium => QualityLevel::Medium,
            Self::High => QualityLevel::High,
            Self::Ultra => QualityLevel::Ultra,
            Self::Custom { .. } => QualityLevel::Custom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_multipliers() {
        assert_eq!(Quality::Low.multiplier(), 0.5);
        assert_eq!(Quality::Medium.multiplier(), 1.0);
        assert_eq!(Quality::High.multiplier(), 2.0);
        assert_eq!(Quality::Ultra.multiplier(), 4.0);
    }

    #[test]
    fn test_presets_share_default_floor() {
        for quality in [Quality::Low, Quality::Medium, Quality::High, Quality::Ultra] {
            assert_eq!(quality.min_iterations(), DEFAULT_MIN_ITERATIONS);
        }
    }

    #[test]
    fn test_custom_carries_its_own_values() {
        let quality = Quality::Custom { min_iterations: 200, multiplier: 3.0 };

        assert_eq!(quality.min_iterations(), 200);
        assert_eq!(quality.multiplier(), 3.0);
        assert_eq!(quality.level(), QualityLevel::Custom);
    }

    #[test]
    fn test_level_parses_case_insensitively() {
        assert_eq!("ultra".parse::<QualityLevel>(), Ok(QualityLevel::Ultra));
        assert_eq!("High".parse::<QualityLevel>(), Ok(QualityLevel::High));
        assert!("extreme".parse::<QualityLevel>().is_err());
    }

    #[test]
    fn test_display_names_round_trip_through_from_str() {
        for &level in QualityLevel::ALL {
            assert_eq!(level.to_string().parse::<QualityLevel>(), Ok(level));
        }
    }
}
