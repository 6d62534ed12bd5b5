//! # pixl-core
//!
//! Core types for pixl: the image collaborator the pixel transforms are
//! written against.
//!
//! - [`Color`] - an `[r, g, b]` triple of `i32` channels, never clamped
//! - [`color`] - named presets and the [`COLORS`](color::COLORS) table
//! - [`Raster`] - the capability set transforms depend on
//! - [`Image`] - copy-on-write in-memory RGB buffer implementing [`Raster`]
//! - [`gallery`] - procedurally generated sample images
//!
//! ## Crate Structure
//!
//! ```text
//! pixl-core (this crate)
//!    ^
//!    |
//!    +-- pixl-ops (pixel transforms)
//!    +-- pixl-cli (demo binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod gallery;
pub mod image;
pub mod raster;

// Re-exports for convenience
pub use color::{Color, COLORS};
pub use error::*;
pub use gallery::{gallery_names, load_image_from_gallery};
pub use image::Image;
pub use raster::Raster;

/// Prelude module for convenient imports.
///
/// ```
/// use pixl_core::prelude::*;
///
/// let img = Image::create(2, 2, color::WHITE);
/// assert_eq!(img.get_pixel(1, 1), Some(color::WHITE));
/// ```
pub mod prelude {
    pub use crate::color::{self, Color, B, COLORS, G, R};
    pub use crate::error::{Error, Result};
    pub use crate::gallery::load_image_from_gallery;
    pub use crate::image::Image;
    pub use crate::raster::Raster;
}
