//! Generic per-pixel mapping.
//!
//! [`map_line`] is the one **mutating** operation in this crate: it rewrites
//! a single row of the raster it is given. [`image_map`] builds a new image by
//! running [`map_line`] over every row of a copy.
//!
//! # Line numbers
//!
//! A line number is anything implementing [`LineNumber`]: every primitive
//! integer type plus `f32` and `f64`. A value only names a row when it is a
//! whole number in `0..height`. Anything else (negative, fractional, NaN,
//! infinite, past the last row) makes [`map_line`] a silent no-op.
//!
//! ```rust
//! use pixl_core::{Image, Raster, color};
//! use pixl_ops::map::map_line;
//!
//! let mut img = Image::create(10, 10, color::WHITE);
//! map_line(&mut img, 1, |_| color::BLACK);
//! map_line(&mut img, 0.5, |_| color::RED); // ignored
//!
//! assert_eq!(img.pixel(5, 1), color::BLACK);
//! assert_eq!(img.pixel(5, 0), color::WHITE);
//! ```

use pixl_core::{Color, Raster};
use tracing::{debug, trace};

/// Conversion from a caller-supplied line number to a row index.
pub trait LineNumber: Copy + std::fmt::Debug {
    /// Returns the row index if `self` is a whole number in `0..height`.
    fn to_row(self, height: u32) -> Option<u32>;
}

macro_rules! impl_line_number_int {
    ($($t:ty),*) => {
        $(
            impl LineNumber for $t {
                #[inline]
                fn to_row(self, height: u32) -> Option<u32> {
                    u32::try_from(self).ok().filter(|&y| y < height)
                }
            }
        )*
    };
}

macro_rules! impl_line_number_float {
    ($($t:ty),*) => {
        $(
            impl LineNumber for $t {
                #[inline]
                fn to_row(self, height: u32) -> Option<u32> {
                    // compare against height as an integer; `height as f32` rounds
                    if self.is_finite()
                        && self.fract() == 0.0
                        && self >= 0.0
                        && self <= u32::MAX as $t
                    {
                        Some(self as u32).filter(|&y| y < height)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_line_number_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_line_number_float!(f32, f64);

/// Replaces every pixel of row `line_no` with `f(pixel)`, in place.
///
/// `f` sees each pixel's value from before this call and runs exactly once
/// per column. When `line_no` does not name a row of `img` the image is left
/// exactly as it was and nothing is reported.
///
/// # Example
///
/// ```rust
/// use pixl_core::{Image, Raster, color};
/// use pixl_ops::map::map_line;
///
/// let mut img = Image::create(10, 10, color::WHITE);
/// map_line(&mut img, 8, |_| [100, 50, 200]);
/// assert_eq!(img.pixel(2, 8), [100, 50, 200]);
///
/// map_line(&mut img, -1, |_| [100, 100, 100]);
/// map_line(&mut img, 10, |_| [100, 100, 100]);
/// assert_eq!(img.pixel(0, 0), color::WHITE);
/// ```
pub fn map_line<T, L, F>(img: &mut T, line_no: L, mut f: F)
where
    T: Raster + ?Sized,
    L: LineNumber,
    F: FnMut(Color) -> Color,
{
    let Some(y) = line_no.to_row(img.height()) else {
        debug!(?line_no, height = img.height(), "map_line: not a row, skipping");
        return;
    };

    for x in 0..img.width() {
        let prev = img.pixel(x, y);
        img.set_pixel(x, y, f(prev));
    }
}

/// Returns a new image of the same size where every pixel is `f(pixel)`.
///
/// Works row by row on a copy via [`map_line`]; `img` is not modified and
/// `f` runs exactly once per pixel.
///
/// # Example
///
/// ```rust
/// use pixl_core::{Image, Raster, color};
/// use pixl_ops::map::image_map;
///
/// let white = Image::create(10, 10, color::WHITE);
/// let red = image_map(&white, |_| color::RED);
/// assert_eq!(red.pixel(9, 9), color::RED);
/// assert_eq!(white.pixel(9, 9), color::WHITE);
/// ```
pub fn image_map<T, F>(img: &T, mut f: F) -> T
where
    T: Raster,
    F: FnMut(Color) -> Color,
{
    trace!(width = img.width(), height = img.height(), "image_map");
    let mut out = img.copy();
    for y in 0..img.height() {
        map_line(&mut out, y, &mut f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixl_core::Image;
    use pixl_core::color::{BLACK, RED, WHITE};

    fn white10() -> Image {
        Image::create(10, 10, WHITE)
    }

    #[test]
    fn test_line_number_ints() {
        assert_eq!(3i32.to_row(10), Some(3));
        assert_eq!(9usize.to_row(10), Some(9));
        assert_eq!(10u8.to_row(10), None);
        assert_eq!((-1i64).to_row(10), None);
        assert_eq!(u64::MAX.to_row(10), None);
        assert_eq!(0u32.to_row(0), None);
    }

    #[test]
    fn test_line_number_floats() {
        assert_eq!(2.0f64.to_row(10), Some(2));
        assert_eq!((-0.0f64).to_row(10), Some(0));
        assert_eq!(0.5f64.to_row(10), None);
        assert_eq!(9.999f32.to_row(10), None);
        assert_eq!(10.0f32.to_row(10), None);
        assert_eq!(f64::NAN.to_row(10), None);
        assert_eq!(f64::INFINITY.to_row(10), None);
        assert_eq!((-3.0f64).to_row(10), None);
    }

    #[test]
    fn test_line_number_float_last_row_of_tall_image() {
        // 16_777_217 has no exact f32 representation
        assert_eq!(16_777_216.0f32.to_row(16_777_217), Some(16_777_216));
        assert_eq!(16_777_216.0f32.to_row(16_777_216), None);
        assert_eq!(4_294_967_294.0f64.to_row(u32::MAX), Some(4_294_967_294));
        assert_eq!(4_294_967_295.0f64.to_row(u32::MAX), None);
        assert_eq!(1e20f64.to_row(u32::MAX), None);
    }

    #[test]
    fn test_map_line_black_row() {
        let mut img = white10();
        map_line(&mut img, 1, |_| BLACK);
        assert_eq!(img.pixel(0, 1), BLACK);
        assert_eq!(img.pixel(5, 1), BLACK);
        assert_eq!(img.pixel(9, 1), BLACK);

        map_line(&mut img, 1, |_| BLACK);
        assert_eq!(img.pixel(5, 2), WHITE);
        assert_eq!(img.pixel(5, 0), WHITE);
    }

    #[test]
    fn test_map_line_specified_color() {
        let mut img = white10();
        map_line(&mut img, 8, |_| [100, 50, 200]);
        assert_eq!(img.pixel(2, 8), [100, 50, 200]);
        assert_eq!(img.pixel(5, 8), [100, 50, 200]);
    }

    #[test]
    fn test_map_line_out_of_bounds_is_noop() {
        let mut img = white10();
        let before = img.clone();
        map_line(&mut img, -1, |_| [100, 100, 100]);
        map_line(&mut img, 10, |_| [100, 100, 100]);
        map_line(&mut img, i64::MAX, |_| [100, 100, 100]);
        assert_eq!(img, before);
        assert!(img.shares_buffer_with(&before));
    }

    #[test]
    fn test_map_line_fractional_is_noop() {
        let mut img = white10();
        let before = img.clone();
        map_line(&mut img, 0.5, |_| [100, 100, 100]);
        map_line(&mut img, f32::NAN, |_| [100, 100, 100]);
        assert_eq!(img, before);
        assert_eq!(img.pixel(5, 5), WHITE);
        assert_eq!(img.pixel(0, 0), WHITE);
    }

    #[test]
    fn test_map_line_whole_float_is_row() {
        let mut img = white10();
        map_line(&mut img, 3.0, |_| RED);
        assert_eq!(img.pixel(4, 3), RED);
    }

    #[test]
    fn test_map_line_sees_original_values() {
        let mut img = Image::from_fn(4, 2, |x, y| [x as i32, y as i32, 7]);
        map_line(&mut img, 1, |[r, g, b]| [r * 10, g, b + 1]);
        assert_eq!(img.pixel(3, 1), [30, 1, 8]);
        assert_eq!(img.pixel(3, 0), [3, 0, 7]);
    }

    #[test]
    fn test_map_line_calls_once_per_column() {
        let mut img = white10();
        let mut calls = 0;
        map_line(&mut img, 4, |c| {
            calls += 1;
            c
        });
        assert_eq!(calls, 10);

        map_line(&mut img, 40, |c| {
            calls += 1;
            c
        });
        assert_eq!(calls, 10);
    }

    #[test]
    fn test_image_map_red() {
        let white = white10();
        let red = image_map(&white, |_| RED);
        for (x, y) in [(0, 0), (9, 0), (5, 5), (0, 9), (9, 9)] {
            assert_eq!(red.pixel(x, y), RED, "at ({}, {})", x, y);
        }
        assert_eq!(white.pixel(0, 0), WHITE);
    }

    #[test]
    fn test_image_map_calls_once_per_pixel() {
        let img = Image::create(7, 3, WHITE);
        let mut calls = 0usize;
        let _ = image_map(&img, |c| {
            calls += 1;
            c
        });
        assert_eq!(calls, img.pixel_count());
    }

    #[test]
    fn test_image_map_keeps_dimensions() {
        let img = Image::create(3, 5, WHITE);
        let out = image_map(&img, |[r, g, b]| [b, g, r]);
        assert_eq!(out.dimensions(), (3, 5));
    }
}
