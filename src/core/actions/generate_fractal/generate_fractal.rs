use crate::core::data::point::Point;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Evaluates every pixel of the algorithm's resolution on the calling thread,
/// row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Result<Vec<Alg::Success>, Alg::Failure>
{
    let resolution = algorithm.resolution();

    (0..resolution.height())
        .flat_map(|y| {
            (0..resolution.width())
                .map(move |x| Point { x, y })
        })
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::resolution::Resolution;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubIndexAlgorithm {
        resolution: Resolution,
    }

    impl FractalAlgorithm for StubIndexAlgorithm {
        type Success = u32;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel.x == 99 {
                return Err(StubError {});
            }
            Ok(pixel.y * 10 + pixel.x)
        }

        fn resolution(&self) -> Resolution {
            self.resolution
        }
    }

    #[test]
    fn test_generates_row_major_order() {
        let algorithm = StubIndexAlgorithm { resolution: Resolution::new(3, 2).unwrap() };

        assert_eq!(generate_fractal(&algorithm).unwrap(), vec![0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let algorithm = StubIndexAlgorithm { resolution: Resolution::new(100, 1).unwrap() };

        assert_eq!(generate_fractal(&algorithm), Err(StubError {}));
    }
}
