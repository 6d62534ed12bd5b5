//! In-memory RGB image buffer.
//!
//! [`Image`] is the concrete [`Raster`] used throughout pixl. Pixels are
//! stored **row-major**, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use pixl_core::{Image, Raster, color};
//!
//! let mut img = Image::filled(10, 10, color::WHITE);
//! img.set_pixel(0, 0, [100, 0, 150]);
//! assert_eq!(img.pixel(0, 0), [100, 0, 150]);
//! assert_eq!(img.pixel(9, 9), color::WHITE);
//! ```
//!
//! # Sharing
//!
//! The channel buffer lives behind an [`Arc`], so `clone()` is cheap and the
//! first write through either handle detaches it (copy-on-write). Neither
//! handle ever observes the other's writes. [`Raster::copy`] always detaches
//! eagerly.

use crate::{Color, Error, Raster, Result};
use std::sync::Arc;

const N: usize = 3;

/// Owned RGB image buffer with `i32` channels.
///
/// # Example
///
/// ```rust
/// use pixl_core::{Image, color};
///
/// let img = Image::filled(4, 2, color::RED);
/// assert_eq!(img.dimensions(), (4, 2));
/// assert_eq!(img.pixel_count(), 8);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    /// Channel data buffer (Arc for cheap cloning)
    data: Arc<Vec<i32>>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates an image filled with a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixel_count * N);
        for _ in 0..pixel_count {
            data.extend_from_slice(&color);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Creates an image from interleaved channel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold exactly
    /// `width * height * 3` values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixl_core::Image;
    ///
    /// let img = Image::from_data(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(img.pixel(1, 0), [4, 5, 6]);
    /// assert!(Image::from_data(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<i32>) -> Result<Self> {
        let expected = width as usize * height as usize * N;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Color,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * N);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw interleaved channel data.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * N
    }

    #[inline]
    fn check_bounds(&self, x: u32, y: u32) -> Result<()> {
        if x < self.width && y < self.height {
            Ok(())
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        [self.data[offset], self.data[offset + 1], self.data[offset + 2]]
    }

    /// Returns the pixel at (x, y), or [`Error::OutOfBounds`].
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Color> {
        self.check_bounds(x, y)?;
        Ok(self.pixel(x, y))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for image {}x{}",
            x,
            y,
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[offset..offset + N].copy_from_slice(&color);
    }

    /// Sets the pixel at (x, y), or returns [`Error::OutOfBounds`] leaving
    /// the image untouched.
    pub fn try_set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check_bounds(x, y)?;
        self.set_pixel(x, y, color);
        Ok(())
    }

    /// Fills the entire image with one color.
    pub fn fill(&mut self, color: Color) {
        let data = Arc::make_mut(&mut self.data);
        for chunk in data.chunks_exact_mut(N) {
            chunk.copy_from_slice(&color);
        }
    }

    /// Returns a row of pixels as interleaved channels.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        assert!(
            y < self.height,
            "row {} out of bounds for height {}",
            y,
            self.height
        );
        let start = y as usize * self.width as usize * N;
        let end = start + self.width as usize * N;
        &self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates, row by row.
    ///
    /// ```rust
    /// use pixl_core::{Image, color};
    ///
    /// let img = Image::filled(3, 3, color::BLUE);
    /// assert!(img.pixels().all(|(_, _, px)| px == color::BLUE));
    /// ```
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Returns `true` if both handles point at the same channel buffer.
    ///
    /// Mostly useful to observe copy-on-write in tests.
    pub fn shares_buffer_with(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Raster for Image {
    fn create(width: u32, height: u32, fill: Color) -> Self {
        Image::filled(width, height, fill)
    }

    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Color {
        Image::pixel(self, x, y)
    }

    #[inline]
    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        Image::set_pixel(self, x, y, color)
    }

    fn copy(&self) -> Self {
        Self {
            data: Arc::new(self.data.as_ref().clone()),
            width: self.width,
            height: self.height,
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("shared", &(Arc::strong_count(&self.data) > 1))
            .finish()
    }
}
