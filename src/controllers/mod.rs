pub mod file_render;
pub mod interactive;
pub mod ports;
