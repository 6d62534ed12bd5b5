//! Error types for pixl-core operations.
//!
//! The pixel transforms themselves never fail. Errors only come from the
//! fallible edges of the image collaborator:
//! - constructing an [`Image`](crate::Image) from raw channel data
//! - the `try_*` pixel accessors
//! - loading from the sample gallery
//! - parsing a color from text
//!
//! # Usage
//!
//! ```rust
//! use pixl_core::{Error, Result};
//!
//! fn check(x: u32, y: u32, width: u32, height: u32) -> Result<()> {
//!     if x >= width || y >= height {
//!         return Err(Error::out_of_bounds(x, y, width, height));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(3, 3, 2, 2).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the image collaborator.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixl_core::Error;
    ///
    /// let err = Error::out_of_bounds(100, 50, 80, 60);
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Channel data does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// No gallery image with this name.
    #[error("unknown gallery image '{name}' (available: {available})")]
    UnknownGalleryImage {
        /// Name that was requested
        name: String,
        /// Comma-separated list of valid names
        available: String,
    },

    /// Text could not be parsed as a color.
    #[error("invalid color '{input}': {reason}")]
    InvalidColor {
        /// Offending input
        input: String,
        /// What was wrong with it
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnknownGalleryImage`] error.
    #[inline]
    pub fn unknown_gallery_image(name: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownGalleryImage {
            name: name.into(),
            available: available.into(),
        }
    }

    /// Creates an [`Error::InvalidColor`] error.
    #[inline]
    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = Error::invalid_dimensions(4, 4, "expected 48 elements, got 3");
        assert!(err.to_string().contains("4x4"));
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_invalid_color() {
        let err = Error::invalid_color("1,2", "expected 3 channels");
        assert!(err.to_string().contains("'1,2'"));
    }

    #[test]
    fn test_unknown_gallery_image() {
        let err = Error::unknown_gallery_image("cat", "dog, pencils");
        let msg = err.to_string();
        assert!(matches!(err, Error::UnknownGalleryImage { .. }));
        assert_eq!(msg, "unknown gallery image 'cat' (available: dog, pencils)");
        assert!(!err.is_bounds_error());
    }
}
