mod controllers;
mod core;
mod presenters;

pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::controllers::render::RenderController;
pub use crate::core::actions::render_frame::ports::cancel_token::{
    CancelToken, Cancelled, NeverCancel,
};
pub use crate::core::actions::render_frame::ports::progress_sink::{NullProgress, ProgressSink};
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame, render_frame_cancelable,
};
pub use crate::core::colour::palette::{Palette, PaletteGenerationError};
pub use crate::core::config::render_config::{ColouringMode, RenderConfig, RenderConfigError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::frame_buffer::FrameBuffer;
pub use crate::core::data::grid_dimensions::{GridDimensions, GridDimensionsError};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::presenters::file::png::PngFilePresenter;
pub use crate::presenters::file::ppm::PpmFilePresenter;
