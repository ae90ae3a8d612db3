use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{generate_pixel_buffer, GeneratePixelBufferError};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::colour_lut::ColourLut;
use crate::core::data::iteration_field::{EscapeValue, IterationField};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::convert::Infallible;

/// Table index for an escape value: the value is clamped to
/// `[0, max_iterations]` and scaled onto `[0, lut_len - 1]`, rounding down.
#[must_use]
pub fn lut_index(value: f64, max_iterations: u32, lut_len: usize) -> usize {
    if max_iterations == 0 || lut_len == 0 {
        return 0;
    }

    let max = f64::from(max_iterations);
    // NaN clamps to 0 through the saturating cast
    let scaled = (value.clamp(0.0, max) * (lut_len - 1) as f64 / max).floor() as usize;

    scaled.min(lut_len - 1)
}

/// Colours escape values through a prebuilt lookup table.
#[derive(Debug, Clone, Copy)]
pub struct LutColourMap<'a> {
    lut: &'a ColourLut,
    max_iterations: u32,
}

impl<'a> LutColourMap<'a> {
    #[must_use]
    pub fn new(lut: &'a ColourLut, max_iterations: u32) -> Self {
        Self { lut, max_iterations }
    }

    #[must_use]
    pub fn colour_for(&self, value: f64) -> Colour {
        self.lut.get(lut_index(value, self.max_iterations, self.lut.len()))
    }
}

impl ColourMap<EscapeValue> for LutColourMap<'_> {
    type Failure = Infallible;

    fn map(&self, value: EscapeValue) -> Result<Colour, Infallible> {
        Ok(self.colour_for(value.value))
    }

    fn display_name(&self) -> &str {
        "Gradient lookup table"
    }
}

/// Converts an iteration field into an RGB image of the same size.
pub fn map_field(
    field: &IterationField,
    max_iterations: u32,
    lut: &ColourLut,
) -> Result<PixelBuffer, PixelBufferError> {
    let mapper = LutColourMap::new(lut, max_iterations);

    generate_pixel_buffer(field.values(), &mapper, field.resolution()).map_err(|err| match err {
        GeneratePixelBufferError::ColourMap(never) => match never {},
        GeneratePixelBufferError::PixelBuffer(err) => err,
    })
}
