use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work; each row is evaluated on one worker and the rows
/// are stitched back together in order, so the output matches
/// [`generate_fractal`](super::generate_fractal::generate_fractal) exactly.
pub fn generate_fractal_parallel_rayon<Alg>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let height = grid.height();
    let width = grid.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..height)
        .into_par_iter()
        .map(|row| {
            let y = height - 1 - row;
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
