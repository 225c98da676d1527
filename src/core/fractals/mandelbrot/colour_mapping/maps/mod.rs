use crate::core::fractals::mandelbrot::escape_time::PointClass;

pub mod blue_white_gradient;
pub mod cosine;
pub mod fire_gradient;

/// Smoothed escape time as a fraction of the iteration cap, clamped to `[0, 1]`.
pub(crate) fn normalised_escape(class: PointClass, max_iterations: u32) -> Option<f64> {
    let smooth = class.smooth_iteration_count()?;
    Some((smooth / f64::from(max_iterations.max(1))).clamp(0.0, 1.0))
}
