use crate::core::data::viewport::REFERENCE_SPAN;
use crate::core::fractals::mandelbrot::quality::Quality;
use std::error::Error;
use std::fmt;

const ITERATIONS_PER_OCTAVE: f64 = 50.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationPolicyError {
    InvalidZoomSpan { zoom_span: f64 },
    ZeroMinIterations,
    InvalidMultiplier { multiplier: f64 },
}

impl fmt::Display for IterationPolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomSpan { zoom_span } => {
                write!(f, "zoom span must be positive and finite: {}", zoom_span)
            }
            Self::ZeroMinIterations => {
                write!(f, "minimum iterations must be greater than zero")
            }
            Self::InvalidMultiplier { multiplier } => {
                write!(f, "quality multiplier must be positive and finite: {}", multiplier)
            }
        }
    }
}

impl Error for IterationPolicyError {}

/// Iteration budget for a viewport `zoom_span` wide.
///
/// Every halving of the span below the full view adds
/// `50 * multiplier` iterations; the result never drops below the quality's
/// floor.
pub fn compute_max_iterations(zoom_span: f64, quality: Quality) -> Result<u32, IterationPolicyError> {
    if !zoom_span.is_finite() || zoom_span <= 0.0 {
        return Err(IterationPolicyError::InvalidZoomSpan { zoom_span });
    }

    let floor = quality.min_iterations();
    if floor == 0 {
        return Err(IterationPolicyError::ZeroMinIterations);
    }

    let multiplier = quality.multiplier();
    if !multiplier.is_finite() || multiplier <= 0.0 {
        return Err(IterationPolicyError::InvalidMultiplier { multiplier });
    }

    let depth = (REFERENCE_SPAN / zoom_span).log2();
    // saturating cast: negative depths become 0, overflow becomes u32::MAX
    let scaled = (multiplier * ITERATIONS_PER_OCTAVE * depth).trunc() as u32;

    Ok(scaled.max(floor))
}
