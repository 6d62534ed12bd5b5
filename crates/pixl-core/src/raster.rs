//! The raster capability the pixel transforms are written against.
//!
//! Transforms in `pixl-ops` never touch a concrete buffer. They go through
//! [`Raster`], so the in-memory [`Image`](crate::Image) can be swapped for a
//! test double or another bitmap backend without changing transform code.
//!
//! Bounds enforcement belongs to the implementor: [`Raster::pixel`] and
//! [`Raster::set_pixel`] panic on out-of-range coordinates, and callers that
//! need a recoverable check use [`Raster::get_pixel`].
//!
//! Loading and display sit outside the trait. Rasters are loaded with
//! [`load_image_from_gallery`](crate::load_image_from_gallery) or built with
//! [`Raster::create`]; the `pixl` binary's `show` renders any `Raster` to the
//! terminal. The transforms need neither, so a backend only implements the
//! pixel access below.
//!
//! ```rust
//! use pixl_core::{Raster, load_image_from_gallery};
//!
//! fn corner<T: Raster>(img: &T) -> Option<[i32; 3]> {
//!     img.get_pixel(img.width() - 1, img.height() - 1)
//! }
//!
//! let dog = load_image_from_gallery(Some("dog")).unwrap();
//! assert!(corner(&dog).is_some());
//! ```

use crate::Color;

/// A mutable 2-D grid of [`Color`] values.
pub trait Raster {
    /// Allocates a `width` x `height` raster with every pixel set to `fill`.
    fn create(width: u32, height: u32, fill: Color) -> Self
    where
        Self: Sized;

    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    fn pixel(&self, x: u32, y: u32) -> Color;

    /// Overwrites the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Returns an independent deep copy.
    ///
    /// Writes to the copy are never visible through `self` and vice versa.
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns `(width, height)`.
    #[inline]
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Every `(x, y)` coordinate exactly once, row by row.
    fn coordinates(&self) -> Vec<(u32, u32)> {
        let (width, height) = self.dimensions();
        let mut coords = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                coords.push((x, y));
            }
        }
        coords
    }
}
