use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::config::render_config::RenderConfig;

const PROGRESS_STEP_PERCENT: usize = 10;

/// Drives one render from configuration to file: status output, progress,
/// timing, then hand-off to the presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run(
        &self,
        config: &RenderConfig,
        filepath: impl AsRef<Path>,
    ) -> Result<(), Box<dyn Error>> {
        let filepath = filepath.as_ref();
        let dimensions = config.dimensions();

        println!("Rendering Mandelbrot set...");
        println!("Image size: {}x{}", dimensions.width(), dimensions.height());
        println!("Max iterations: {}", config.max_iteration());
        println!("Colouring: {}", config.colouring());

        // One line per decile; rows complete out of order, so a percentage
        // may occasionally print twice.
        let progress = |completed: usize, total: usize| {
            let percent = completed * 100 / total;
            let previous = (completed - 1) * 100 / total;
            if percent / PROGRESS_STEP_PERCENT != previous / PROGRESS_STEP_PERCENT {
                println!("  escaped {}%", percent);
            }
        };

        let start = Instant::now();
        let frame = render_frame(config, &progress)?;
        println!("Duration:   {:?}", start.elapsed());

        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.presenter.present(&frame, filepath)?;
        println!("Saved to {}", filepath.display());

        Ok(())
    }
}
