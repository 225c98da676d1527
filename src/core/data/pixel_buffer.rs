use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn grid_to_buffer_size(grid: PixelGrid) -> usize {
    grid.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, grid: PixelGrid },
    BoundsMismatch {
        grid_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                grid_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel grid size {} does not match buffer size {}",
                    grid_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, grid } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} grid",
                    pixel.x,
                    pixel.y,
                    grid.width(),
                    grid.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// RGBA8 raster, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    grid: PixelGrid,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            buffer: vec![0; grid_to_buffer_size(grid)],
        }
    }

    pub fn from_data(grid: PixelGrid, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let grid_size = grid_to_buffer_size(grid);

        if grid_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                grid_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { grid, buffer })
    }

    #[must_use]
    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.grid.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                grid: self.grid,
            });
        }

        let row_start = pixel.y as usize * self.grid.width() as usize;
        Ok((row_start + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
