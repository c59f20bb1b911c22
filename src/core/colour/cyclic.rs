use crate::core::colour::palette::Palette;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Diagonal palette cycling: `palette[(x + y) mod len]`.
///
/// Ignores escape counts entirely, so the escape kernel never runs in this
/// mode. Kept as the fallback/demo colouring.
#[must_use]
pub fn cyclic_colour(palette: &Palette, pixel: Point) -> Colour {
    palette.cycle(pixel.x as usize + pixel.y as usize)
}
