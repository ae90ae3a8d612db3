use crate::core::data::resolution::ResolutionError;
use std::{error::Error, fmt};

#[derive(Debug, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    InvalidEscapeRadiusError { escape_radius: f64 },
    ResolutionError(ResolutionError),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::InvalidEscapeRadiusError { escape_radius } => {
                write!(f, "Escape radius must be positive and finite: {}", escape_radius)
            }
            Self::ResolutionError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for MandelbrotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ResolutionError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolutionError> for MandelbrotError {
    fn from(err: ResolutionError) -> Self {
        Self::ResolutionError(err)
    }
}
