use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::escape_time::PointClass;

pub trait MandelbrotColourMap: ColourMap<PointClass> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap<PointClass> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: PointClass) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
