//! Channel transforms expressed through [`image_map`].
//!
//! These produce the same pixels as their direct-loop counterparts in
//! [`channels`](crate::channels); only the traversal differs.

use crate::channels::{drop_red, flip_pixel};
use crate::map::image_map;
use pixl_core::Raster;

/// Removes the red channel via [`image_map`].
///
/// Pixel-identical to [`remove_red`](crate::channels::remove_red).
///
/// ```rust
/// use pixl_core::{Image, Raster, color};
/// use pixl_ops::compose::map_to_gb;
///
/// let gb = map_to_gb(&Image::create(10, 10, color::WHITE));
/// assert_eq!(gb.pixel(9, 0), [0, 255, 255]);
/// ```
pub fn map_to_gb<T: Raster>(img: &T) -> T {
    image_map(img, drop_red)
}

/// Flips channels via [`image_map`].
///
/// Pixel-identical to [`flip_colors`](crate::channels::flip_colors).
pub fn map_flip_colors<T: Raster>(img: &T) -> T {
    image_map(img, flip_pixel)
}
