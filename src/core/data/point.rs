/// Integer pixel coordinate inside a [`PixelGrid`](super::pixel_grid::PixelGrid).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
