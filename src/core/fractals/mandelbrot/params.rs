use crate::core::{
    data::{resolution::Resolution, viewport::Viewport},
    fractals::mandelbrot::errors::MandelbrotError,
};

/// Everything one render needs. Validated on construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    viewport: Viewport,
    resolution: Resolution,
    max_iterations: u32,
    escape_radius: f64,
}

impl RenderRequest {
    pub fn new(
        viewport: Viewport,
        width: u32,
        height: u32,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, MandelbrotError> {
        let resolution = Resolution::new(width, height)?;

        Self::with_resolution(viewport, resolution, max_iterations, escape_radius)
    }

    pub fn with_resolution(
        viewport: Viewport,
        resolution: Resolution,
        max_iterations: u32,
        escape_radius: f64,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(MandelbrotError::InvalidEscapeRadiusError { escape_radius });
        }

        Ok(Self {
            viewport,
            resolution,
            max_iterations,
            escape_radius,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }
}
