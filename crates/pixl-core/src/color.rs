//! RGB color triples and the named color table.
//!
//! A [`Color`] is three `i32` channels in `[R, G, B]` order. Channels are
//! conventionally in `0..=255`, but nothing here clamps: a transform may
//! legitimately produce values outside that range and they are stored as-is.
//!
//! ```
//! use pixl_core::color::{self, Color, G};
//!
//! let c: Color = color::named("cyan").unwrap();
//! assert_eq!(c[G], 255);
//! assert_eq!(color::parse_color("10,-4,300").unwrap(), [10, -4, 300]);
//! ```

use crate::{Error, Result};

/// An RGB pixel value.
pub type Color = [i32; 3];

/// Index of the red channel.
pub const R: usize = 0;
/// Index of the green channel.
pub const G: usize = 1;
/// Index of the blue channel.
pub const B: usize = 2;

/// `black` preset.
pub const BLACK: Color = [0, 0, 0];
/// `white` preset.
pub const WHITE: Color = [255, 255, 255];
/// `red` preset.
pub const RED: Color = [255, 0, 0];
/// `green` preset.
pub const GREEN: Color = [0, 255, 0];
/// `blue` preset.
pub const BLUE: Color = [0, 0, 255];
/// `yellow` preset.
pub const YELLOW: Color = [255, 255, 0];
/// `cyan` preset.
pub const CYAN: Color = [0, 255, 255];
/// `magenta` preset.
pub const MAGENTA: Color = [255, 0, 255];
/// `gray` preset.
pub const GRAY: Color = [128, 128, 128];

/// Table of preset colors, looked up by [`named`].
pub const COLORS: &[(&str, Color)] = &[
    ("black", BLACK),
    ("white", WHITE),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("cyan", CYAN),
    ("magenta", MAGENTA),
    ("gray", GRAY),
];

/// Looks up a preset color by name, ignoring ASCII case.
pub fn named(name: &str) -> Option<Color> {
    COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// Parses a color from a table name or an `r,g,b` triple.
///
/// Whitespace around the channels is ignored. Channel values are any
/// `i32`; they are not clamped.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for unknown names, a wrong channel count,
/// or a channel that is not an integer.
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();
    if let Some(c) = named(s) {
        return Ok(c);
    }

    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(Error::invalid_color(
            s,
            format!(
                "expected a color name or 3 comma-separated channels, got {}",
                parts.len()
            ),
        ));
    }

    let mut color = BLACK;
    for (slot, part) in color.iter_mut().zip(&parts) {
        *slot = part
            .parse::<i32>()
            .map_err(|e| Error::invalid_color(s, format!("channel '{}': {}", part, e)))?;
    }
    Ok(color)
}
