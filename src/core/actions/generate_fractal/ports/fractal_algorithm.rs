use std::error::Error;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Per-pixel kernel. `compute` must be a pure function of `pixel` so that
/// pixels can be evaluated in any order or concurrently.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;

    fn resolution(&self) -> Resolution;
}
