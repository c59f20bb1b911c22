const DEFAULT_TRANSLATION_X: f64 = 0.65;
const DEFAULT_TRANSLATION_Y: f64 = 0.50;
const DEFAULT_SCALE: f64 = 2.2;

/// Framing of the complex plane: per-axis translation fractions and one
/// shared zoom factor. The translations are fractions of the grid width and
/// height, which allows non-square framing of a square plane region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub translation_x: f64,
    pub translation_y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            translation_x: DEFAULT_TRANSLATION_X,
            translation_y: DEFAULT_TRANSLATION_Y,
            scale: DEFAULT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frames_classic_view() {
        let viewport = Viewport::default();

        assert_eq!(viewport.translation_x, 0.65);
        assert_eq!(viewport.translation_y, 0.50);
        assert_eq!(viewport.scale, 2.2);
    }
}
