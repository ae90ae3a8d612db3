use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideResolution { point: Point, resolution: Resolution },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideResolution { point, resolution } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} image",
                    point.x,
                    point.y,
                    resolution.width(),
                    resolution.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the complex plane. Column 0 sits on `xmin` and row 0 on
/// `ymin`; the far edges `xmax`/`ymax` are never sampled.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    resolution: Resolution,
    viewport: Viewport,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !resolution.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideResolution {
            point: pixel_position,
            resolution,
        });
    }

    let real = viewport.xmin()
        + viewport.width() * f64::from(pixel_position.x) / f64::from(resolution.width());
    let imag = viewport.ymin()
        + viewport.height() * f64::from(pixel_position.y) / f64::from(resolution.height());

    Ok(Complex { real, imag })
}
