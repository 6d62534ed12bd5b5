//! The transforms only depend on the `Raster` capability set, so a recording
//! double can stand in for the real buffer.

use std::cell::Cell;

use pixl_core::{Color, Raster};
use pixl_ops::{flip_colors, image_map, map_line, map_to_gb, remove_red};

/// Sparse raster that counts reads and writes.
struct Recorder {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    reads: Cell<usize>,
    writes: usize,
    copies: Cell<usize>,
}

impl Raster for Recorder {
    fn create(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; (width * height) as usize],
            reads: Cell::new(0),
            writes: 0,
            copies: Cell::new(0),
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x < self.width && y < self.height, "read out of bounds");
        self.reads.set(self.reads.get() + 1);
        self.pixels[(y * self.width + x) as usize]
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        assert!(x < self.width && y < self.height, "write out of bounds");
        self.writes += 1;
        self.pixels[(y * self.width + x) as usize] = color;
    }

    fn copy(&self) -> Self {
        self.copies.set(self.copies.get() + 1);
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
            reads: Cell::new(0),
            writes: 0,
            copies: Cell::new(0),
        }
    }
}

#[test]
fn remove_red_works_on_a_copy() {
    let src = Recorder::create(4, 3, [9, 8, 7]);
    let out = remove_red(&src);

    assert_eq!(src.copies.get(), 1);
    assert_eq!(src.writes, 0);
    assert_eq!(out.writes, 12);
    assert_eq!(out.reads.get(), 12);
    assert!(out.pixels.iter().all(|&c| c == [0, 8, 7]));
}

#[test]
fn flip_colors_generic_over_raster() {
    let src = Recorder::create(2, 2, [100, 0, 150]);
    let out = flip_colors(&src);
    assert!(out.pixels.iter().all(|&c| c == [75, 125, 50]));
    assert_eq!(src.pixels[0], [100, 0, 150]);
}

#[test]
fn image_map_one_write_per_pixel() {
    let src = Recorder::create(5, 4, [1, 2, 3]);
    let out = image_map(&src, |[r, g, b]| [b, g, r]);
    assert_eq!(out.writes, 20);
    assert_eq!(out.reads.get(), 20);
    assert_eq!(src.writes, 0);
    assert!(out.pixels.iter().all(|&c| c == [3, 2, 1]));
}

#[test]
fn map_line_mutates_in_place_without_copy() {
    let mut img = Recorder::create(6, 6, [0, 0, 0]);
    map_line(&mut img, 2usize, |_| [1, 1, 1]);
    assert_eq!(img.copies.get(), 0);
    assert_eq!(img.writes, 6);

    map_line(&mut img, 6usize, |_| [2, 2, 2]);
    map_line(&mut img, 2.5f32, |_| [2, 2, 2]);
    assert_eq!(img.writes, 6);
    assert_eq!(img.reads.get(), 6);
}

#[test]
fn map_to_gb_generic_over_raster() {
    let src = Recorder::create(3, 1, [255, 255, 255]);
    assert!(map_to_gb(&src).pixels.iter().all(|&c| c == [0, 255, 255]));
}

/// Single-column raster of any height that stores nothing and counts writes
/// per row.
struct Column {
    height: u32,
    written: Vec<u32>,
}

impl Raster for Column {
    fn create(_width: u32, height: u32, _fill: Color) -> Self {
        Self {
            height,
            written: Vec::new(),
        }
    }

    fn width(&self) -> u32 {
        1
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Color {
        assert!(x == 0 && y < self.height, "read out of bounds");
        [0, 0, 0]
    }

    fn set_pixel(&mut self, x: u32, y: u32, _color: Color) {
        assert!(x == 0 && y < self.height, "write out of bounds");
        self.written.push(y);
    }

    fn copy(&self) -> Self {
        Self {
            height: self.height,
            written: self.written.clone(),
        }
    }
}

#[test]
fn map_line_float_reaches_last_row_of_tall_raster() {
    let mut img = Column::create(1, 16_777_217, [0, 0, 0]);
    map_line(&mut img, 16_777_216.0f32, |_| [1, 1, 1]);
    map_line(&mut img, 16_777_216u32, |_| [1, 1, 1]);
    assert_eq!(img.written, vec![16_777_216, 16_777_216]);
}
