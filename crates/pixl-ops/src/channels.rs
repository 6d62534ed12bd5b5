//! Channel-level transforms written as direct coordinate loops.
//!
//! - [`remove_red`] - zero the red channel
//! - [`flip_colors`] - replace each channel by the truncated average of the
//!   other two
//!
//! Both work on a [`Raster::copy`] of the input and return it; the input is
//! never written. The per-pixel kernels [`drop_red`] and [`flip_pixel`] are
//! public so they can be handed to [`map_line`](crate::map::map_line) or
//! [`image_map`](crate::map::image_map).
//!
//! # Example
//!
//! ```rust
//! use pixl_core::{Image, Raster, color};
//! use pixl_ops::channels::{flip_colors, remove_red};
//!
//! let mut img = Image::create(10, 10, color::WHITE);
//! img.set_pixel(0, 0, [100, 0, 150]);
//!
//! assert_eq!(remove_red(&img).pixel(9, 9), [0, 255, 255]);
//! assert_eq!(flip_colors(&img).pixel(0, 0), [75, 125, 50]);
//! assert_eq!(img.pixel(0, 0), [100, 0, 150]);
//! ```

use pixl_core::color::{B, G, R};
use pixl_core::{Color, Raster};
use tracing::trace;

/// Returns `c` with its red channel set to 0.
#[inline]
pub fn drop_red(c: Color) -> Color {
    [0, c[G], c[B]]
}

/// Truncated mean of two channels, computed without overflow.
#[inline]
fn mean(a: i32, b: i32) -> i32 {
    // the mean of two i32 values always fits back into i32
    ((a as i64 + b as i64) / 2) as i32
}

/// Replaces every channel by the mean of the other two, truncating toward
/// zero.
///
/// ```
/// use pixl_ops::channels::flip_pixel;
///
/// assert_eq!(flip_pixel([100, 0, 150]), [75, 125, 50]);
/// assert_eq!(flip_pixel([250, 200, 80]), [140, 165, 225]);
/// ```
#[inline]
pub fn flip_pixel(c: Color) -> Color {
    [mean(c[G], c[B]), mean(c[R], c[B]), mean(c[R], c[G])]
}

/// Applies `kernel` to every coordinate of a fresh copy of `img`.
fn per_coordinate<T: Raster>(img: &T, kernel: fn(Color) -> Color) -> T {
    let mut out = img.copy();
    for (x, y) in out.coordinates() {
        let prev = out.pixel(x, y);
        out.set_pixel(x, y, kernel(prev));
    }
    out
}

/// Returns a new image where every pixel has its red channel removed.
///
/// Green and blue are carried over unchanged. The input is left untouched.
pub fn remove_red<T: Raster>(img: &T) -> T {
    trace!(width = img.width(), height = img.height(), "remove_red");
    per_coordinate(img, drop_red)
}

/// Returns a new image where each channel is the truncated average of the
/// other two channels of the same pixel.
///
/// No clamping is applied. The input is left untouched.
pub fn flip_colors<T: Raster>(img: &T) -> T {
    trace!(width = img.width(), height = img.height(), "flip_colors");
    per_coordinate(img, flip_pixel)
}
