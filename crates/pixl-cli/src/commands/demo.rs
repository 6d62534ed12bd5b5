//! `demo` command: walk through every transform on sample images.

use anyhow::{Context, Result};
use pixl_core::{Image, Raster, color, load_image_from_gallery};
use pixl_ops::{flip_colors, map_flip_colors, map_line, map_to_gb, remove_red};
use tracing::info;

use super::show;

/// 100x100 white image with a red line on every tenth row.
pub fn red_stripes() -> Image {
    let mut img = Image::create(100, 100, color::WHITE);
    for x in 0..img.width() {
        for y in (0..img.height()).step_by(10) {
            img.set_pixel(x, y, color::RED);
        }
    }
    img
}

fn gallery(name: Option<&str>) -> Result<Image> {
    load_image_from_gallery(name)
        .with_context(|| {
            format!(
                "Failed to load gallery image {}",
                name.unwrap_or("<random>")
            )
        })
}

/// Run the demo sequence, rendering each step.
pub fn run(width: u32) -> Result<()> {
    let random = gallery(None)?;
    let pencils = gallery(Some("pencils"))?;
    let mut dog = gallery(Some("dog"))?;

    let stripes = red_stripes();
    show("red stripes", &stripes, width);

    info!("remove_red on a random gallery image");
    show("remove_red(random)", &remove_red(&random), width);

    info!("flip_colors on pencils");
    show("flip_colors(pencils)", &flip_colors(&pencils), width);

    info!("map_line on dog, line 100");
    map_line(&mut dog, 100, |_| color::WHITE);
    show("map_line(dog, 100, white)", &dog, width);

    show("map_to_gb(red stripes)", &map_to_gb(&stripes), width);
    show("map_flip_colors(red stripes)", &map_flip_colors(&stripes), width);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_red_stripes() {
        let img = red_stripes();
        assert_eq!(img.pixel(0, 0), color::RED);
        assert_eq!(img.pixel(99, 90), color::RED);
        assert_eq!(img.pixel(50, 5), color::WHITE);
        assert_eq!(img.pixel(50, 99), color::WHITE);
    }
}
