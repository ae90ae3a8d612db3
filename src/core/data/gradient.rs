//! Sparse colour gradients as edited by the user.
//!
//! A gradient serializes as a list of `[position, "#RRGGBB"]` pairs. Loading
//! is lenient: a stored stop that is not a number/colour pair, or whose colour
//! token does not parse, is skipped with a warning and the rest of the list is
//! kept.

use crate::core::data::colour::Colour;
use log::warn;
use serde::de::{Deserializer, IgnoredAny};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientStopError {
    NonFinitePosition { position: f64 },
}

impl fmt::Display for GradientStopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { position } => {
                write!(f, "gradient stop position must be finite: {}", position)
            }
        }
    }
}

impl Error for GradientStopError {}

/// A colour anchored at a position in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    position: f64,
    colour: Colour,
}

impl GradientStop {
    /// Positions outside `[0, 1]` are clamped onto the range.
    pub fn new(position: f64, colour: Colour) -> Result<Self, GradientStopError> {
        if !position.is_finite() {
            return Err(GradientStopError::NonFinitePosition { position });
        }

        Ok(Self {
            position: position.clamp(0.0, 1.0),
            colour,
        })
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }
}

/// Stops in the order they were supplied; duplicates and unsorted positions
/// are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    #[must_use]
    pub fn new(stops: Vec<GradientStop>) -> Self {
        Self { stops }
    }

    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn push(&mut self, stop: GradientStop) {
        self.stops.push(stop);
    }

    /// Stops ordered by position; equal positions keep their supplied order.
    #[must_use]
    pub fn sorted_stops(&self) -> Vec<GradientStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        stops
    }

    /// The palette used when nothing else is configured.
    #[must_use]
    pub fn default_palette() -> Self {
        let stops = [
            (0.0, Colour { r: 0x00, g: 0x07, b: 0x64 }),
            (0.16, Colour { r: 0x20, g: 0x68, b: 0xCB }),
            (0.42, Colour { r: 0xED, g: 0xFF, b: 0xFF }),
            (0.6425, Colour { r: 0xFF, g: 0xAA, b: 0x00 }),
            (0.8575, Colour { r: 0x00, g: 0x02, b: 0x00 }),
        ];

        Self {
            stops: stops
                .into_iter()
                .map(|(position, colour)| GradientStop { position, colour })
                .collect(),
        }
    }
}

impl FromIterator<GradientStop> for Gradient {
    fn from_iter<I: IntoIterator<Item = GradientStop>>(iter: I) -> Self {
        Self {
            stops: iter.into_iter().collect(),
        }
    }
}

impl Serialize for Gradient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.stops
                .iter()
                .map(|stop| (stop.position, stop.colour.to_hex())),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredStop {
    Pair(f64, String),
    Malformed(IgnoredAny),
}

impl<'de> Deserialize<'de> for Gradient {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = Vec::<StoredStop>::deserialize(deserializer)?;
        let mut stops = Vec::with_capacity(stored.len());

        for (index, entry) in stored.into_iter().enumerate() {
            let StoredStop::Pair(position, token) = entry else {
                warn!("skipping gradient stop {}: expected [position, colour]", index);
                continue;
            };

            let stop = Colour::from_hex(&token)
                .map_err(|err| err.to_string())
                .and_then(|colour| {
                    GradientStop::new(position, colour).map_err(|err| err.to_string())
                });

            match stop {
                Ok(stop) => stops.push(stop),
                Err(reason) => warn!("skipping gradient stop {}: {}", index, reason),
            }
        }

        Ok(Self { stops })
    }
}
