//! Terminal preview of a raster using 24-bit ANSI colors.
//!
//! Each character cell shows two vertically stacked pixels: the upper half
//! block `▀` takes the top pixel as foreground and the bottom pixel as
//! background. Images wider than the requested column count are
//! nearest-neighbour downsampled by a whole factor. Channels are clamped to
//! `0..=255` for display only.

use pixl_core::{Color, Raster};
use std::fmt::Write;

const UPPER_HALF: char = '\u{2580}';
const RESET: &str = "\x1b[0m";

#[inline]
fn display_channel(c: i32) -> u8 {
    c.clamp(0, 255) as u8
}

#[inline]
fn display_color(c: Color) -> [u8; 3] {
    c.map(display_channel)
}

/// Renders `img` as ANSI text at most `max_width` columns wide.
pub fn render<T: Raster>(img: &T, max_width: u32) -> String {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return String::new();
    }

    let step = width.div_ceil(max_width.max(1));
    let cols = width.div_ceil(step);
    let rows = height.div_ceil(step);

    let mut out = String::new();
    for cy in (0..rows).step_by(2) {
        for cx in 0..cols {
            let x = cx * step;
            let [tr, tg, tb] = display_color(img.pixel(x, cy * step));
            // odd row count: the last cell has no bottom pixel
            match (cy + 1 < rows).then(|| img.pixel(x, (cy + 1) * step)) {
                Some(bottom) => {
                    let [br, bg, bb] = display_color(bottom);
                    let _ = write!(
                        out,
                        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}",
                        tr, tg, tb, br, bg, bb, UPPER_HALF
                    );
                }
                None => {
                    let _ = write!(
                        out,
                        "{}\x1b[38;2;{};{};{}m{}",
                        RESET, tr, tg, tb, UPPER_HALF
                    );
                }
            }
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixl_core::{Image, color};

    #[test]
    fn test_render_empty() {
        assert!(render(&Image::create(0, 4, color::WHITE), 10).is_empty());
    }

    #[test]
    fn test_render_line_count() {
        // 4x5 -> 3 text rows (last one half filled)
        let text = render(&Image::create(4, 5, color::WHITE), 10);
        assert_eq!(text.lines().count(), 3);
        assert_eq!(text.matches(UPPER_HALF).count(), 12);
    }

    #[test]
    fn test_render_downsamples() {
        let text = render(&Image::create(100, 2, color::RED), 10);
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text.matches(UPPER_HALF).count(), 10);
        assert!(text.contains("38;2;255;0;0m"));
    }

    #[test]
    fn test_render_clamps_for_display() {
        let text = render(&Image::create(1, 2, [-5, 300, 128]), 10);
        assert!(text.contains("38;2;0;255;128m"));
    }
}
