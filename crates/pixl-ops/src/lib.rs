//! # pixl-ops
//!
//! Pixel transforms over any [`Raster`](pixl_core::Raster).
//!
//! # Modules
//!
//! - [`channels`] - [`remove_red`], [`flip_colors`] as direct coordinate loops
//! - [`map`] - [`map_line`] (in place) and [`image_map`]
//! - [`compose`] - [`map_to_gb`], [`map_flip_colors`] built on [`image_map`]
//!
//! Every function except [`map_line`] returns a fresh image and leaves its
//! input alone. [`map_line`] rewrites one row of the raster it is handed;
//! clone first if the original is still needed.
//!
//! Channel values are never clamped.
//!
//! # Example
//!
//! ```rust
//! use pixl_core::{Image, Raster, color};
//! use pixl_ops::{flip_colors, image_map, map_flip_colors, map_line};
//!
//! let mut img = Image::create(10, 10, color::WHITE);
//! img.set_pixel(0, 0, [100, 0, 150]);
//! assert_eq!(flip_colors(&img), map_flip_colors(&img));
//!
//! let red = image_map(&img, |_| color::RED);
//! map_line(&mut img, 9, |_| color::BLACK);
//! assert_eq!(img.pixel(0, 9), color::BLACK);
//! assert_eq!(red.pixel(0, 9), color::RED);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channels;
pub mod compose;
pub mod map;

pub use channels::{drop_red, flip_colors, flip_pixel, remove_red};
pub use compose::{map_flip_colors, map_to_gb};
pub use map::{image_map, map_line, LineNumber};
