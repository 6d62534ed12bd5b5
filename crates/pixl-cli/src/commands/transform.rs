//! Single-transform commands.

use anyhow::Result;
use clap::Args;
use pixl_core::{Color, Image};
use tracing::info;

use super::{SourceArgs, load_source, parse_color_arg, show};

/// Whole-image transforms that take no parameters.
#[derive(Debug, Clone, Copy)]
pub enum Op {
    /// `remove_red`
    RemoveRed,
    /// `flip_colors`
    FlipColors,
    /// `map_to_gb`
    MapToGb,
    /// `map_flip_colors`
    MapFlipColors,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::RemoveRed => "remove-red",
            Op::FlipColors => "flip-colors",
            Op::MapToGb => "map-to-gb",
            Op::MapFlipColors => "map-flip-colors",
        }
    }

    fn apply(self, img: &Image) -> Image {
        match self {
            Op::RemoveRed => pixl_ops::remove_red(img),
            Op::FlipColors => pixl_ops::flip_colors(img),
            Op::MapToGb => pixl_ops::map_to_gb(img),
            Op::MapFlipColors => pixl_ops::map_flip_colors(img),
        }
    }
}

/// Arguments for the `map-line` command.
#[derive(Args, Debug)]
pub struct MapLineArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Row to paint; negative, fractional or past-the-end values leave the image unchanged
    #[arg(short, long, allow_hyphen_values = true)]
    pub line: f64,

    /// Color to paint the row with
    #[arg(short, long, default_value = "white", value_parser = parse_color_arg)]
    pub color: Color,
}

/// Arguments for the `map` command.
#[derive(Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Color every pixel is mapped to
    #[arg(short, long, value_parser = parse_color_arg)]
    pub color: Color,
}

/// Run a parameterless transform and show before/after.
pub fn run(op: Op, args: SourceArgs, width: u32) -> Result<()> {
    let src = load_source(&args)?;
    show("input", &src, width);

    info!(op = op.name(), "Applying transform");
    let out = op.apply(&src);
    show(op.name(), &out, width);
    Ok(())
}

/// Run the in-place `map-line` command.
pub fn run_map_line(args: MapLineArgs, width: u32) -> Result<()> {
    let mut img = load_source(&args.source)?;
    let before = img.clone();

    let color = args.color;
    pixl_ops::map_line(&mut img, args.line, |_| color);

    if img == before {
        info!(line = args.line, "map-line left the image unchanged");
    }
    show(&format!("map-line {}", args.line), &img, width);
    Ok(())
}

/// Run the `map` command with a constant color.
pub fn run_map(args: MapArgs, width: u32) -> Result<()> {
    let src = load_source(&args.source)?;
    let color = args.color;
    let out = pixl_ops::image_map(&src, |_| color);
    show("map", &out, width);
    Ok(())
}
