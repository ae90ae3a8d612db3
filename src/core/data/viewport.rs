use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Horizontal span of the default full view; the iteration policy measures
/// zoom depth against it.
pub const REFERENCE_SPAN: f64 = 3.5;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteBounds,
    InvalidSize { width: f64, height: f64 },
    InvalidZoomFactor { factor: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds => write!(f, "viewport bounds must be finite"),
            Self::InvalidSize { width, height } => {
                write!(f, "viewport size must be positive: {}x{}", width, height)
            }
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
        }
    }
}

impl Error for ViewportError {}

/// Rectangle of the complex plane being rendered.
///
/// `xmin`/`ymin` is the corner drawn at the top-left pixel. The bounds are
/// validated on construction and never reordered.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    xmin: f64,
    xmax: f64,
    ymin: f64,
    ymax: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xmin: -2.5,
            xmax: 1.0,
            ymin: -1.25,
            ymax: 1.25,
        }
    }
}

impl Viewport {
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, ViewportError> {
        if !(xmin.is_finite() && xmax.is_finite() && ymin.is_finite() && ymax.is_finite()) {
            return Err(ViewportError::NonFiniteBounds);
        }

        let width = xmax - xmin;
        let height = ymax - ymin;

        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::InvalidSize { width, height });
        }

        Ok(Self { xmin, xmax, ymin, ymax })
    }

    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// The horizontal extent, used as the zoom measure.
    #[must_use]
    pub fn zoom_span(&self) -> f64 {
        self.width()
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.xmin + self.xmax) / 2.0,
            imag: (self.ymin + self.ymax) / 2.0,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.xmin <= point.real
            && point.real <= self.xmax
            && self.ymin <= point.imag
            && point.imag <= self.ymax
    }

    /// Scales the viewport about `anchor`, which keeps its relative position.
    /// A factor below 1 zooms in.
    pub fn zoom_about(&self, anchor: Complex, factor: f64) -> Result<Self, ViewportError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ViewportError::InvalidZoomFactor { factor });
        }

        Self::new(
            anchor.real + (self.xmin - anchor.real) * factor,
            anchor.real + (self.xmax - anchor.real) * factor,
            anchor.imag + (self.ymin - anchor.imag) * factor,
            anchor.imag + (self.ymax - anchor.imag) * factor,
        )
    }

    pub fn pan(&self, dx: f64, dy: f64) -> Result<Self, ViewportError> {
        Self::new(self.xmin + dx, self.xmax + dx, self.ymin + dy, self.ymax + dy)
    }
}
