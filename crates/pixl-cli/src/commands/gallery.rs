//! `gallery` command: list the built-in sample images.

use anyhow::Result;
use pixl_core::{gallery_names, load_image_from_gallery};

/// Print every gallery name with its dimensions.
pub fn run() -> Result<()> {
    for name in gallery_names() {
        let img = load_image_from_gallery(Some(name))?;
        println!("{:<10} {}x{}", name, img.width(), img.height());
    }
    Ok(())
}
