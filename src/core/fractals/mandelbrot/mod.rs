pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod escape_time;
pub mod mandelbrot_config;
