use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread.
///
/// Results are in raster order with the top row first. Algorithm pixel space
/// has `y` growing upward, so raster row `r` is algorithm row `height - 1 - r`.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    grid: PixelGrid,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let height = grid.height();
    let width = grid.width();

    (0..height)
        .flat_map(|row| {
            let y = height - 1 - row;
            (0..width).map(move |x| Point { x, y })
        })
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
