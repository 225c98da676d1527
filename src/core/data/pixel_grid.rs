use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelGridError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel grid size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelGridError {}

/// Dimensions of the output raster.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
}

impl PixelGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelGridError> {
        if width == 0 || height == 0 {
            return Err(PixelGridError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
