use std::path::PathBuf;

use clap::Parser;

use escape_render::{
    Colour, ColouringMode, GridDimensions, PngFilePresenter, PpmFilePresenter, RenderConfig,
    RenderController, Viewport,
};

/// Escape-time Mandelbrot renderer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Escape-time iteration cap
    #[arg(long, default_value_t = 512)]
    max_iteration: u32,

    /// Colouring mode: cyclic, smooth or histogram
    #[arg(long, default_value_t = ColouringMode::Histogram)]
    mode: ColouringMode,

    /// Horizontal view centre as a fraction of the width
    #[arg(long, default_value_t = 0.65)]
    translation_x: f64,

    /// Vertical view centre as a fraction of the height
    #[arg(long, default_value_t = 0.50)]
    translation_y: f64,

    /// Zoom factor applied before normalisation
    #[arg(long, default_value_t = 2.2)]
    scale: f64,

    /// Palette control colours, at least two comma-separated #RRGGBB values
    #[arg(long, default_value = "#0000ff,#ff0000,#00ff00")]
    palette: String,

    /// Output file; a .ppm extension writes binary PPM, anything else PNG
    #[arg(short, long, default_value = "output/mandelbrot.png")]
    output: PathBuf,
}

fn parse_colour(s: &str) -> Result<Colour, String> {
    let hex = s
        .trim()
        .strip_prefix('#')
        .ok_or_else(|| format!("colour '{}' must start with '#'", s))?;

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(format!("colour '{}' must be of the form #RRGGBB", s));
    }

    let channel = |from: usize| {
        u8::from_str_radix(&hex[from..from + 2], 16)
            .map_err(|_| format!("colour '{}' has invalid hex digits", s))
    };

    Ok(Colour::rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn parse_palette(s: &str) -> Result<Vec<Colour>, String> {
    s.split(',').map(parse_colour).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let dimensions = GridDimensions::new(args.width, args.height)?;
    let viewport = Viewport {
        translation_x: args.translation_x,
        translation_y: args.translation_y,
        scale: args.scale,
    };
    let palette_colours = parse_palette(&args.palette)?;

    let config = RenderConfig::new(
        dimensions,
        args.max_iteration,
        args.mode,
        viewport,
        palette_colours,
    )?;

    let writes_ppm = args
        .output
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("ppm"));

    if writes_ppm {
        RenderController::new(PpmFilePresenter::new()).run(&config, &args.output)
    } else {
        RenderController::new(PngFilePresenter::new()).run(&config, &args.output)
    }
}
