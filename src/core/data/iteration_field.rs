use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

/// Smoothed escape time of one pixel.
///
/// `escaped` is false when the orbit stayed bounded for the whole iteration
/// budget; `value` is then exactly the budget.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeValue {
    pub value: f64,
    pub escaped: bool,
}

impl EscapeValue {
    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            value: f64::from(max_iterations),
            escaped: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationFieldError {
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for IterationFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "iteration field expected {} values, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for IterationFieldError {}

/// Row-major grid of escape values, one per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationField {
    resolution: Resolution,
    values: Vec<EscapeValue>,
}

impl IterationField {
    pub fn from_values(
        resolution: Resolution,
        values: Vec<EscapeValue>,
    ) -> Result<Self, IterationFieldError> {
        if values.len() != resolution.size() {
            return Err(IterationFieldError::SizeMismatch {
                expected: resolution.size(),
                actual: values.len(),
            });
        }

        Ok(Self { resolution, values })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn values(&self) -> &[EscapeValue] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, pixel: Point) -> Option<EscapeValue> {
        if !self.resolution.contains_point(pixel) {
            return None;
        }

        let index = pixel.y as usize * self.resolution.width() as usize + pixel.x as usize;
        Some(self.values[index])
    }
}
