use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::data::colour::Colour;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;

pub const MIN_PALETTE_CONTROL_COLOURS: usize = 2;

/// How escape counts become colours. Exactly one policy per render; smooth
/// and histogram cannot be combined because the histogram passes need raw
/// integer counts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColouringMode {
    Cyclic,
    Smooth,
    Histogram,
}

impl ColouringMode {
    pub const ALL: &'static [Self] = &[Self::Cyclic, Self::Smooth, Self::Histogram];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cyclic => "cyclic",
            Self::Smooth => "smooth",
            Self::Histogram => "histogram",
        }
    }
}

impl Default for ColouringMode {
    fn default() -> Self {
        Self::Histogram
    }
}

impl fmt::Display for ColouringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for ColouringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown colouring mode '{}', expected one of: cyclic, smooth, histogram", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderConfigError {
    ZeroMaxIteration,
    TooFewPaletteColours { found: usize },
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIteration => {
                write!(f, "maximum iteration count must be greater than zero")
            }
            Self::TooFewPaletteColours { found } => {
                write!(
                    f,
                    "palette needs at least {} control colours, found {}",
                    MIN_PALETTE_CONTROL_COLOURS, found
                )
            }
        }
    }
}

impl Error for RenderConfigError {}

/// Immutable configuration of one render, validated at construction.
///
/// The parallel phases never see invalid dimensions, a zero iteration cap or
/// an under-sized control palette.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    dimensions: GridDimensions,
    max_iteration: u32,
    colouring: ColouringMode,
    viewport: Viewport,
    palette_colours: Vec<Colour>,
}

impl RenderConfig {
    pub fn new(
        dimensions: GridDimensions,
        max_iteration: u32,
        colouring: ColouringMode,
        viewport: Viewport,
        palette_colours: Vec<Colour>,
    ) -> Result<Self, RenderConfigError> {
        if max_iteration == 0 {
            return Err(RenderConfigError::ZeroMaxIteration);
        }

        if palette_colours.len() < MIN_PALETTE_CONTROL_COLOURS {
            return Err(RenderConfigError::TooFewPaletteColours {
                found: palette_colours.len(),
            });
        }

        Ok(Self {
            dimensions,
            max_iteration,
            colouring,
            viewport,
            palette_colours,
        })
    }

    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn max_iteration(&self) -> u32 {
        self.max_iteration
    }

    #[must_use]
    pub fn colouring(&self) -> ColouringMode {
        self.colouring
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn palette_colours(&self) -> &[Colour] {
        &self.palette_colours
    }
}
