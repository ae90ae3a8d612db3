use std::error::Error;
use std::fmt;
use std::time::Instant;

use log::debug;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::colour_lut::ColourLut;
use crate::core::data::iteration_field::{IterationField, IterationFieldError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_mapping::lut_colour_map::map_field;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::params::RenderRequest;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum RenderError {
    Request(MandelbrotError),
    Coordinates(PixelToComplexCoordsError),
    Field(IterationFieldError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "invalid render request: {}", err),
            Self::Coordinates(err) => write!(f, "coordinate mapping error: {}", err),
            Self::Field(err) => write!(f, "iteration field error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request(err) => Some(err),
            Self::Coordinates(err) => Some(err),
            Self::Field(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Request(err)
    }
}

impl From<PixelToComplexCoordsError> for RenderError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Coordinates(err)
    }
}

impl From<IterationFieldError> for RenderError {
    fn from(err: IterationFieldError) -> Self {
        Self::Field(err)
    }
}

impl From<PixelBufferError> for RenderError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Computes the smoothed escape value of every pixel in the request.
pub fn evaluate(request: &RenderRequest) -> Result<IterationField, RenderError> {
    let algorithm = MandelbrotAlgorithm::new(*request);
    let start = Instant::now();
    let values = generate_fractal_parallel_rayon(&algorithm)?;

    debug!(
        "evaluated {}x{} pixels at {} iterations in {:?}",
        request.resolution().width(),
        request.resolution().height(),
        request.max_iterations(),
        start.elapsed()
    );

    Ok(IterationField::from_values(request.resolution(), values)?)
}

/// Evaluates the request and colours the result through `lut`.
///
/// Blocks until the whole image is ready; nothing is kept between calls.
pub fn render(request: &RenderRequest, lut: &ColourLut) -> Result<PixelBuffer, RenderError> {
    let field = evaluate(request)?;
    let start = Instant::now();
    let image = map_field(&field, request.max_iterations(), lut)?;

    debug!("mapped field through {}-entry LUT in {:?}", lut.len(), start.elapsed());

    Ok(image)
}

/// [`render`] for callers holding loose parameters rather than a request.
pub fn render_view(
    viewport: Viewport,
    width: u32,
    height: u32,
    max_iterations: u32,
    escape_radius: f64,
    lut: &ColourLut,
) -> Result<PixelBuffer, RenderError> {
    let request = RenderRequest::new(viewport, width, height, max_iterations, escape_radius)?;

    render(&request, lut)
}
