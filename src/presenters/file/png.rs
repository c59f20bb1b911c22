use std::io;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes PNG through the `image` crate, unpacking ARGB pixels to the RGBA
/// byte order the encoder expects.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let dimensions = frame.dimensions();

        let mut rgba = Vec::with_capacity(frame.pixels().len() * 4);
        for &argb in frame.pixels() {
            let colour = Colour::from_argb(argb);
            rgba.extend_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
        }

        let image = RgbaImage::from_raw(dimensions.width(), dimensions.height(), rgba)
            .ok_or_else(|| io::Error::other("frame size does not match its dimensions"))?;

        image
            .save_with_format(filepath, ImageFormat::Png)
            .map_err(io::Error::other)
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
