use crate::core::data::point::Point;
use std::error::Error;

/// Per-pixel evaluation. `compute` takes `&self` so one instance can be shared
/// across every worker of a parallel frame.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
