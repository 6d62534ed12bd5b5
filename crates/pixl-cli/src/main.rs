//! pixl - pixel transform demo CLI
//!
//! Runs the pixl transforms against gallery or synthetic images and shows
//! the results in the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod preview;

use commands::transform::Op;
use commands::{MapArgs, MapLineArgs, SourceArgs};

#[derive(Parser)]
#[command(name = "pixl")]
#[command(author, version, about = "Pixel transform demo CLI")]
#[command(long_about = "
Applies simple RGB pixel transforms to built-in gallery images or
synthetic solid-color images, and renders the result in the terminal.

Examples:
  pixl demo                                # replay the full demo
  pixl gallery                             # list gallery images
  pixl remove-red --image dog
  pixl flip-colors --size 40x20 --fill 100,0,150
  pixl map-line --image dog --line 100 --color white
  pixl map-line --image dog --line 0.5 --color red   # no-op
  pixl map --image pencils --color 255,0,0

Set RUST_LOG (e.g. RUST_LOG=pixl_ops=trace) to override -v.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Width of the terminal preview in columns
    #[arg(long, global = true, default_value = "64")]
    preview_width: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the demo: stripes, remove-red, flip, map-line and composed maps
    Demo,

    /// List gallery images
    #[command(visible_alias = "g")]
    Gallery,

    /// Zero the red channel
    #[command(name = "remove-red")]
    RemoveRed(SourceArgs),

    /// Replace each channel by the average of the other two
    #[command(name = "flip-colors")]
    FlipColors(SourceArgs),

    /// Remove red through the generic image map
    #[command(name = "map-to-gb")]
    MapToGb(SourceArgs),

    /// Flip colors through the generic image map
    #[command(name = "map-flip-colors")]
    MapFlipColors(SourceArgs),

    /// Paint one row with a color, in place
    #[command(name = "map-line")]
    MapLine(MapLineArgs),

    /// Paint every pixel with a color through the generic image map
    Map(MapArgs),
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let width = cli.preview_width;
    match cli.command {
        Commands::Demo => commands::demo::run(width),
        Commands::Gallery => commands::gallery::run(),
        Commands::RemoveRed(args) => commands::transform::run(Op::RemoveRed, args, width),
        Commands::FlipColors(args) => commands::transform::run(Op::FlipColors, args, width),
        Commands::MapToGb(args) => commands::transform::run(Op::MapToGb, args, width),
        Commands::MapFlipColors(args) => commands::transform::run(Op::MapFlipColors, args, width),
        Commands::MapLine(args) => commands::transform::run_map_line(args, width),
        Commands::Map(args) => commands::transform::run_map(args, width),
    }
}
