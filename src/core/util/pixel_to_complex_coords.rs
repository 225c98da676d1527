use crate::core::data::complex::Complex;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use crate::core::data::view_window::ViewWindow;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideGrid { point: Point, grid: PixelGrid },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideGrid { point, grid } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel grid",
                    point.x,
                    point.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel to the complex plane.
///
/// Pixel `(0, 0)` lands on the window's minimum corner and each pixel step
/// advances by `diameter / width` (real) or `diameter / height` (imaginary), so
/// `y` grows along the imaginary axis.
pub fn pixel_to_complex_coords(
    pixel: Point,
    grid: PixelGrid,
    window: ViewWindow,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !grid.contains_point(pixel) {
        return Err(PixelToComplexCoordsError::PointOutsideGrid { point: pixel, grid });
    }

    let min = window.min_corner();
    let step_real = window.diameter() / f64::from(grid.width());
    let step_imag = window.diameter() / f64::from(grid.height());

    Ok(Complex {
        real: min.real + f64::from(pixel.x) * step_real,
        imag: min.imag + f64::from(pixel.y) * step_imag,
    })
}
