//! CLI command implementations

pub mod demo;
pub mod gallery;
pub mod transform;

pub use transform::{MapArgs, MapLineArgs};

use anyhow::{Context, Result, bail};
use clap::Args;
use pixl_core::{Color, Image, Raster, color};
use tracing::info;

use crate::preview;

/// Where the input image comes from. Shared by every transform command.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Gallery image name (random gallery image if neither this nor --size is given)
    #[arg(short, long, conflicts_with = "size")]
    pub image: Option<String>,

    /// Create a synthetic image of this size, e.g. 10x10
    #[arg(short, long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Fill color for --size: a name (white, red, ...) or r,g,b
    #[arg(short, long, default_value = "white", value_parser = parse_color_arg)]
    pub fill: Color,
}

/// Resolve the source image described by `args`.
pub fn load_source(args: &SourceArgs) -> Result<Image> {
    if let Some((w, h)) = args.size {
        if w == 0 || h == 0 {
            bail!("--size must be non-zero, got {}x{}", w, h);
        }
        info!(width = w, height = h, fill = ?args.fill, "Creating synthetic image");
        return Ok(Image::create(w, h, args.fill));
    }

    let name = args.image.as_deref();
    pixl_core::load_image_from_gallery(name)
        .with_context(|| {
            format!(
                "Failed to load gallery image {}",
                name.unwrap_or("<random>")
            )
        })
}

/// Render `img` to stdout under a title line.
pub fn show<T: Raster>(title: &str, img: &T, width: u32) {
    let (w, h) = img.dimensions();
    println!("== {} ({}x{})", title, w, h);
    print!("{}", preview::render(img, width));
}

/// Parse `WxH` into (width, height).
pub fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w = w
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("width '{}': {}", w, e))?;
    let h = h
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("height '{}': {}", h, e))?;
    Ok((w, h))
}

/// clap adapter for [`color::parse_color`].
pub fn parse_color_arg(s: &str) -> std::result::Result<Color, String> {
    color::parse_color(s).map_err(|e| e.to_string())
}
