use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// A point on the complex plane, kept as separate components because the
/// escape kernel iterates them separately.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlanePoint {
    pub x: f64,
    pub y: f64,
}

/// Maps pixel coordinates onto the complex plane.
///
/// Each axis is translated by its viewport fraction of the grid extent,
/// scaled by the shared zoom factor, then normalised by the grid extent.
/// Pure and total: any pixel maps to some plane point.
#[derive(Debug, Copy, Clone)]
pub struct PlaneMapper {
    dimensions: GridDimensions,
    viewport: Viewport,
}

impl PlaneMapper {
    #[must_use]
    pub fn new(dimensions: GridDimensions, viewport: Viewport) -> Self {
        Self {
            dimensions,
            viewport,
        }
    }

    #[must_use]
    pub fn map(&self, pixel: Point) -> PlanePoint {
        let width = f64::from(self.dimensions.width());
        let height = f64::from(self.dimensions.height());

        let x = (f64::from(pixel.x) - self.viewport.translation_x * width) * self.viewport.scale
            / width;
        let y = (f64::from(pixel.y) - self.viewport.translation_y * height) * self.viewport.scale
            / height;

        PlanePoint { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(width: u32, height: u32, viewport: Viewport) -> PlaneMapper {
        PlaneMapper::new(GridDimensions::new(width, height).unwrap(), viewport)
    }

    #[test]
    fn test_translation_centre_maps_to_origin() {
        let viewport = Viewport {
            translation_x: 0.5,
            translation_y: 0.5,
            scale: 2.2,
        };
        let mapper = mapper(100, 100, viewport);

        let point = mapper.map(Point { x: 50, y: 50 });

        assert_eq!(point, PlanePoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_scale_sets_plane_extent() {
        // With zero translation, the right edge of a width-w grid sits just
        // short of `scale` on the real axis.
        let viewport = Viewport {
            translation_x: 0.0,
            translation_y: 0.0,
            scale: 4.0,
        };
        let mapper = mapper(100, 100, viewport);

        let origin = mapper.map(Point { x: 0, y: 0 });
        let near_edge = mapper.map(Point { x: 99, y: 0 });

        assert_eq!(origin, PlanePoint { x: 0.0, y: 0.0 });
        assert_eq!(near_edge.x, 99.0 * 4.0 / 100.0);
    }

    #[test]
    fn test_axes_translate_independently() {
        let viewport = Viewport {
            translation_x: 0.25,
            translation_y: 0.75,
            scale: 1.0,
        };
        let mapper = mapper(100, 200, viewport);

        let point = mapper.map(Point { x: 25, y: 150 });

        assert_eq!(point, PlanePoint { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_non_square_grid_normalises_per_axis() {
        let viewport = Viewport {
            translation_x: 0.0,
            translation_y: 0.0,
            scale: 1.0,
        };
        let mapper = mapper(200, 100, viewport);

        let point = mapper.map(Point { x: 100, y: 50 });

        // Both axes land at the same plane coordinate despite different
        // pixel offsets.
        assert_eq!(point, PlanePoint { x: 0.5, y: 0.5 });
    }

    #[test]
    fn test_map_is_deterministic() {
        let mapper = mapper(640, 480, Viewport::default());
        let pixel = Point { x: 123, y: 45 };

        assert_eq!(mapper.map(pixel), mapper.map(pixel));
    }
}
