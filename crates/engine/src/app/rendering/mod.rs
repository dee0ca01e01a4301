mod draw_list;
mod font;
mod raster;
mod renderer;

pub use draw_list::{DrawCommand, DrawList, PixelRect, Rgba};
pub use font::{glyph_advance, line_height, text_width_px};
pub use renderer::Renderer;
