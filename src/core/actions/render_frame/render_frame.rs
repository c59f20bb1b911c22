use std::error::Error;
use std::fmt;

use crate::core::actions::render_frame::ports::cancel_token::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::render_frame::ports::progress_sink::{NullProgress, ProgressSink};
use crate::core::actions::render_frame::scanline::scan_rows;
use crate::core::colour::cyclic::cyclic_colour;
use crate::core::colour::histogram::{HistogramEqualiser, palette_index};
use crate::core::colour::palette::{Palette, PaletteGenerationError};
use crate::core::colour::smooth::smooth_colour;
use crate::core::config::render_config::{ColouringMode, RenderConfig};
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::point::Point;
use crate::core::escape::kernel::EscapeKernel;
use crate::core::escape::plane_mapper::PlaneMapper;

/// Error type for cancelable frame rendering.
///
/// Distinguishes cancellation from palette failures so callers can treat the
/// former as expected control flow.
#[derive(Debug)]
pub enum RenderFrameError {
    /// The render was cancelled before completion.
    Cancelled(Cancelled),
    /// The discrete palette could not be generated.
    Palette(PaletteGenerationError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(cancelled) => write!(f, "{}", cancelled),
            Self::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(cancelled) => Some(cancelled),
            Self::Palette(err) => Some(err),
        }
    }
}

impl From<PaletteGenerationError> for RenderFrameError {
    fn from(err: PaletteGenerationError) -> Self {
        Self::Palette(err)
    }
}

/// Renders one frame from a validated configuration.
///
/// For cancel-aware rendering, use [`render_frame_cancelable`].
pub fn render_frame<P>(
    config: &RenderConfig,
    progress: &P,
) -> Result<FrameBuffer, PaletteGenerationError>
where
    P: ProgressSink,
{
    render_frame_cancelable_impl(config, progress, &NeverCancel).map_err(|e| match e {
        RenderFrameError::Palette(err) => err,
        RenderFrameError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`render_frame`], but polls a cancellation token at each row start
/// and between pipeline phases.
pub fn render_frame_cancelable<P, C>(
    config: &RenderConfig,
    progress: &P,
    cancel: &C,
) -> Result<FrameBuffer, RenderFrameError>
where
    P: ProgressSink,
    C: CancelToken,
{
    render_frame_cancelable_impl(config, progress, cancel)
}

/// The pipeline: palette generation, the row-parallel escape pass, and the
/// colourisation strategy the configured mode selects.
///
/// Cyclic and smooth colourise inline while scanning; histogram first fills
/// the iteration grid, then equalises it, then colourises in a final pass.
/// Every `scan_rows` return and the equaliser's internal passes are full-grid
/// barriers, which is what the histogram phase ordering requires.
fn render_frame_cancelable_impl<P, C>(
    config: &RenderConfig,
    progress: &P,
    cancel: &C,
) -> Result<FrameBuffer, RenderFrameError>
where
    P: ProgressSink,
    C: CancelToken,
{
    let dimensions = config.dimensions();
    let width = dimensions.width() as usize;
    let max_iteration = config.max_iteration();

    // One gradient entry per iteration value plus the cap keeps every
    // histogram palette index in range.
    let gradient_steps = max_iteration as usize + 2;
    let palette = Palette::generate(config.palette_colours(), gradient_steps)?;

    let mapper = PlaneMapper::new(dimensions, config.viewport());
    let kernel = EscapeKernel::new(max_iteration);
    let mut frame = FrameBuffer::new(dimensions);

    match config.colouring() {
        ColouringMode::Cyclic => {
            scan_rows(frame.pixels_mut(), width, cancel, progress, |y, row| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let point = Point {
                        x: x as u32,
                        y: y as u32,
                    };
                    *pixel = cyclic_colour(&palette, point).to_argb();
                }
            })
            .map_err(RenderFrameError::Cancelled)?;
        }
        ColouringMode::Smooth => {
            scan_rows(frame.pixels_mut(), width, cancel, progress, |y, row| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let point = Point {
                        x: x as u32,
                        y: y as u32,
                    };
                    let count = kernel.smoothed_escape_count(mapper.map(point));
                    *pixel = smooth_colour(count, max_iteration).to_argb();
                }
            })
            .map_err(RenderFrameError::Cancelled)?;
        }
        ColouringMode::Histogram => {
            let mut grid = IterationGrid::new(dimensions);

            scan_rows(grid.counts_mut(), width, cancel, progress, |y, row| {
                for (x, count) in row.iter_mut().enumerate() {
                    let point = Point {
                        x: x as u32,
                        y: y as u32,
                    };
                    *count = kernel.escape_count(mapper.map(point));
                }
            })
            .map_err(RenderFrameError::Cancelled)?;

            if cancel.is_cancelled() {
                return Err(RenderFrameError::Cancelled(Cancelled));
            }

            let hue = HistogramEqualiser::new(max_iteration).equalise(&grid);

            scan_rows(frame.pixels_mut(), width, cancel, &NullProgress, |y, row| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    let point = Point {
                        x: x as u32,
                        y: y as u32,
                    };
                    let hue_value = hue.hues()[hue.dimensions().index_of(point)];
                    *pixel = palette
                        .cycle(palette_index(hue_value, max_iteration))
                        .to_argb();
                }
            })
            .map_err(RenderFrameError::Cancelled)?;
        }
    }

    Ok(frame)
}
