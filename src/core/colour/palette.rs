use std::error::Error;
use std::fmt;

use crate::core::data::colour::Colour;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteGenerationError {
    TooFewControlColours { found: usize },
}

impl fmt::Display for PaletteGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewControlColours { found } => {
                write!(
                    f,
                    "gradient generation needs at least 2 control colours, found {}",
                    found
                )
            }
        }
    }
}

impl Error for PaletteGenerationError {}

/// An ordered, immutable colour sequence generated once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Builds a `steps`-entry gradient across the control colours.
    ///
    /// Samples `[0, 1]` uniformly; each sample interpolates linearly between
    /// the two nearest control colours, channels rounded to 8 bits. With
    /// `steps <= 1` there is no second sample to interpolate towards, so the
    /// palette degenerates to the first control colour alone.
    pub fn generate(
        control_colours: &[Colour],
        steps: usize,
    ) -> Result<Self, PaletteGenerationError> {
        if control_colours.len() < 2 {
            return Err(PaletteGenerationError::TooFewControlColours {
                found: control_colours.len(),
            });
        }

        if steps <= 1 {
            return Ok(Self {
                colours: vec![control_colours[0]],
            });
        }

        let segments = control_colours.len() - 1;
        let mut colours = Vec::with_capacity(steps);

        for step in 0..steps {
            let t = step as f64 / (steps - 1) as f64;
            let position = t * segments as f64;
            let segment = (position as usize).min(segments - 1);
            let within = position - segment as f64;

            let from = control_colours[segment];
            let to = control_colours[segment + 1];

            let channel = |from: u8, to: u8| -> u8 {
                (f64::from(from) + (f64::from(to) - f64::from(from)) * within).round() as u8
            };

            colours.push(Colour {
                r: channel(from.r, to.r),
                g: channel(from.g, to.g),
                b: channel(from.b, to.b),
                a: channel(from.a, to.a),
            });
        }

        Ok(Self { colours })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Lookup with wrap-around, the cyclic colourisation rule.
    #[must_use]
    pub fn cycle(&self, index: usize) -> Colour {
        self.colours[index % self.colours.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blue_red() -> Vec<Colour> {
        vec![Colour::rgb(0, 0, 255), Colour::rgb(255, 0, 0)]
    }

    #[test]
    fn test_generate_produces_exactly_steps_colours() {
        let palette = Palette::generate(&blue_red(), 10).unwrap();

        assert_eq!(palette.len(), 10);
    }

    #[test]
    fn test_generate_endpoints_match_control_colours() {
        let controls = vec![
            Colour::rgb(0, 0, 255),
            Colour::rgb(255, 0, 0),
            Colour::rgb(0, 255, 0),
        ];
        let palette = Palette::generate(&controls, 64).unwrap();

        assert_eq!(palette.colours()[0], controls[0]);
        assert_eq!(palette.colours()[63], controls[2]);
    }

    #[test]
    fn test_generate_two_colour_midpoint() {
        let palette = Palette::generate(&blue_red(), 3).unwrap();

        assert_eq!(palette.colours()[1], Colour::rgb(128, 0, 128));
    }

    #[test]
    fn test_generate_is_monotonic_between_adjacent_controls() {
        let palette = Palette::generate(&blue_red(), 32).unwrap();

        for pair in palette.colours().windows(2) {
            assert!(pair[1].r >= pair[0].r);
            assert!(pair[1].b <= pair[0].b);
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = Palette::generate(&blue_red(), 16).unwrap();
        let second = Palette::generate(&blue_red(), 16).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_rejects_single_control_colour() {
        let result = Palette::generate(&[Colour::rgb(1, 2, 3)], 16);

        assert_eq!(
            result,
            Err(PaletteGenerationError::TooFewControlColours { found: 1 })
        );
    }

    #[test]
    fn test_generate_single_step_degenerates_without_panicking() {
        let palette = Palette::generate(&blue_red(), 1).unwrap();

        assert_eq!(palette.len(), 1);
        assert_eq!(palette.colours()[0], Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_generate_zero_steps_degenerates_without_panicking() {
        let palette = Palette::generate(&blue_red(), 0).unwrap();

        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_cycle_wraps_around() {
        let palette = Palette::generate(&blue_red(), 2).unwrap();

        assert_eq!(palette.cycle(0), palette.cycle(2));
        assert_eq!(palette.cycle(1), palette.cycle(3));
        assert_ne!(palette.cycle(0), palette.cycle(1));
    }
}
