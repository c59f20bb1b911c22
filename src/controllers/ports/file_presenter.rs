use std::path::Path;

use crate::core::data::frame_buffer::FrameBuffer;

/// Serialises a finished frame to a file. The frame buffer is the only thing
/// crossing this boundary; format and path are the presenter's business.
pub trait FilePresenterPort {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
