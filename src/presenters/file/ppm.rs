use std::io::Write;
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes binary PPM. The format carries no alpha, so each packed pixel is
/// unpacked and its alpha byte dropped.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = std::fs::File::create(filepath)?;
        let dimensions = frame.dimensions();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", dimensions.width(), dimensions.height())?;
        writeln!(file, "255")?;

        let mut body = Vec::with_capacity(frame.pixels().len() * 3);
        for &argb in frame.pixels() {
            let colour = Colour::from_argb(argb);
            body.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }
        file.write_all(&body)?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
