use std::f64::consts::LN_2;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_field::EscapeValue;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::fractals::mandelbrot::params::RenderRequest;
use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, PixelToComplexCoordsError};

/// Per-pixel escape-time evaluator with continuous (log-log) smoothing.
#[derive(Debug)]
pub struct MandelbrotAlgorithm {
    request: RenderRequest,
    escape_radius_squared: f64,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(request: RenderRequest) -> Self {
        let escape_radius_squared = request.escape_radius() * request.escape_radius();

        Self { request, escape_radius_squared }
    }

    #[must_use]
    pub fn request(&self) -> &RenderRequest {
        &self.request
    }

    /// Escape value of the orbit of `c`.
    #[must_use]
    pub fn escape_value(&self, c: Complex) -> EscapeValue {
        let max_iterations = self.request.max_iterations();
        let mut z = Complex::ZERO;
        let mut iteration = 0;

        while z.magnitude_squared() <= self.escape_radius_squared && iteration < max_iterations {
            z = z * z + c;
            iteration += 1;
        }

        if iteration == max_iterations {
            return EscapeValue::bounded(max_iterations);
        }

        let magnitude_squared = z.magnitude_squared();

        // The log-log correction needs |z| > 1, which radii below 1 do not guarantee.
        // An overflowed orbit gives -inf here and clamps to 0 below.
        let value = if magnitude_squared > 1.0 {
            let log_zn = magnitude_squared.ln() / 2.0;
            let nu = (log_zn / LN_2).log2();
            f64::from(iteration) + 1.0 - nu
        } else {
            f64::from(iteration)
        };

        EscapeValue {
            value: value.clamp(0.0, f64::from(max_iterations)),
            escaped: true,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeValue;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.request.resolution(), self.request.viewport())?;

        Ok(self.escape_value(c))
    }

    fn resolution(&self) -> Resolution {
        self.request.resolution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    fn algorithm(max_iterations: u32, escape_radius: f64) -> MandelbrotAlgorithm {
        let request =
            RenderRequest::new(Viewport::default(), 16, 16, max_iterations, escape_radius).unwrap();
        MandelbrotAlgorithm::new(request)
    }

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 64, 1000] {
            for escape_radius in [2.0, 4.0, 16.0] {
                let value = algorithm(max_iterations, escape_radius).escape_value(Complex::ZERO);

                assert_eq!(value, EscapeValue::bounded(max_iterations));
                assert_eq!(value.value, max_iterations as f64);
            }
        }
    }

    #[test]
    fn test_known_escape_matches_smoothing_formula() {
        let value = algorithm(64, 2.0).escape_value(Complex { real: 2.0, imag: 2.0 });

        // z1 = 2+2i, |z1|^2 = 8 > 4 after one step
        let log_zn = 8.0_f64.ln() / 2.0;
        let nu = (log_zn / LN_2).log2();
        let expected = 1.0 + 1.0 - nu;

        assert!(value.escaped);
        assert_eq!(value.value, expected);
        assert!((value.value - (2.0 - 1.5_f64.log2())).abs() < 1e-12);
    }

    #[test]
    fn test_escape_value_at_boundary_of_disc_keeps_iterating() {
        // |c|^2 == R^2 is still inside: the test is <=, so c = 2 escapes on the second step
        let value = algorithm(64, 2.0).escape_value(Complex { real: 2.0, imag: 0.0 });

        let log_zn = 36.0_f64.ln() / 2.0;
        let expected = 2.0 + 1.0 - (log_zn / LN_2).log2();

        assert!(value.escaped);
        assert_eq!(value.value, expected);
    }

    #[test]
    fn test_far_points_clamp_to_zero() {
        let value = algorithm(64, 2.0).escape_value(Complex { real: 1e6, imag: 1e6 });

        assert!(value.escaped);
        assert_eq!(value.value, 0.0);
    }

    #[test]
    fn test_overflowing_orbit_clamps_to_zero() {
        let algorithm = algorithm(64, 2.0);
        let large = algorithm.escape_value(Complex { real: 1e6, imag: 0.0 });
        let huge = algorithm.escape_value(Complex { real: 1e200, imag: 1e200 });

        assert!(huge.escaped);
        assert_eq!(huge.value, 0.0);
        assert!(huge.value <= large.value);
    }

    #[test]
    fn test_small_escape_radius_stays_finite() {
        let value = algorithm(64, 0.5).escape_value(Complex { real: 0.6, imag: 0.0 });

        assert!(value.escaped);
        assert_eq!(value.value, 1.0);
    }

    #[test]
    fn test_values_stay_within_budget() {
        let algorithm = algorithm(50, 4.0);

        for y in 0..16 {
            for x in 0..16 {
                let value = algorithm.compute(Point { x, y }).unwrap();

                assert!(value.value >= 0.0 && value.value <= 50.0, "{:?}", value);
                if !value.escaped {
                    assert_eq!(value.value, 50.0);
                }
            }
        }
    }

    #[test]
    fn test_compute_maps_pixel_before_iterating() {
        // 16x16 over the default view: column 10, row 8 is c = (-0.3125, 0)
        let algorithm = algorithm(64, 4.0);
        let c = Complex { real: -2.5 + 3.5 * 10.0 / 16.0, imag: -1.25 + 2.5 * 8.0 / 16.0 };

        assert_eq!(
            algorithm.compute(Point { x: 10, y: 8 }).unwrap(),
            algorithm.escape_value(c)
        );
    }

    #[test]
    fn test_compute_rejects_pixels_outside_resolution() {
        assert!(algorithm(64, 4.0).compute(Point { x: 16, y: 0 }).is_err());
    }
}
