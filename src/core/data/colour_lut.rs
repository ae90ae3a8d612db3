use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const DEFAULT_LUT_SIZE: usize = 2048;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourLutError {
    ZeroSize,
}

impl fmt::Display for ColourLutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSize => write!(f, "colour lookup table must have at least one entry"),
        }
    }
}

impl Error for ColourLutError {}

/// How a lookup table was filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MappingMode {
    /// Piecewise-linear ramp between two or more stops.
    Interpolated,
    /// Every entry is the same colour; the gradient had fewer than two stops.
    SolidFill,
}

/// Fixed-size colour ramp indexed by a normalized escape value.
///
/// There is no mutating API: a new gradient means a new table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourLut {
    entries: Vec<Colour>,
    mode: MappingMode,
}

impl ColourLut {
    pub fn new(entries: Vec<Colour>, mode: MappingMode) -> Result<Self, ColourLutError> {
        if entries.is_empty() {
            return Err(ColourLutError::ZeroSize);
        }

        Ok(Self { entries, mode })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> MappingMode {
        self.mode
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Entry at `index`, clamped to the last entry.
    #[must_use]
    pub fn get(&self, index: usize) -> Colour {
        self.entries[index.min(self.entries.len() - 1)]
    }
}
