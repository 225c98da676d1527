use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{
    BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError,
};
use crate::core::data::pixel_grid::PixelGrid;

/// Colours raster-ordered fractal values into an RGBA buffer.
///
/// `input` must hold exactly one value per pixel of `grid`, top row first.
pub fn generate_pixel_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    grid: PixelGrid,
) -> Result<PixelBuffer, PixelBufferError>
where
    T: Send,
    CMap: ColourMap<T> + Sync + ?Sized,
{
    if input.len() != grid.pixel_count() {
        return Err(PixelBufferError::BoundsMismatch {
            grid_size: grid.pixel_count() * BYTES_PER_PIXEL,
            buffer_size: input.len() * BYTES_PER_PIXEL,
        });
    }

    let mut data: PixelBufferData = vec![0; grid.pixel_count() * BYTES_PER_PIXEL];

    data.par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(input.into_par_iter())
        .for_each(|(pixel, value)| {
            pixel.copy_from_slice(&mapper.map(value).to_rgba());
        });

    PixelBuffer::from_data(grid, data)
}
