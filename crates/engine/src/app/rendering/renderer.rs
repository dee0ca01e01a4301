use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use super::raster::rasterize;
use super::DrawList;

/// Software renderer backed by a fixed-size RGBA frame buffer. The buffer
/// keeps the logical resolution; `pixels` scales it onto the window surface.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    buffer_width: u32,
    buffer_height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, buffer_width: u32, buffer_height: u32) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(
            Arc::clone(&window),
            size.width,
            size.height,
            buffer_width,
            buffer_height,
        )?;
        Ok(Self {
            window,
            pixels,
            buffer_width,
            buffer_height,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(
            Arc::clone(&self.window),
            width,
            height,
            self.buffer_width,
            self.buffer_height,
        )?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        surface_width: u32,
        surface_height: u32,
        buffer_width: u32,
        buffer_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(buffer_width, buffer_height, surface)
    }

    pub(crate) fn render(&mut self, draw_list: &DrawList) -> Result<(), Error> {
        rasterize(
            self.pixels.frame_mut(),
            self.buffer_width,
            self.buffer_height,
            draw_list,
        );
        self.pixels.render()
    }
}
