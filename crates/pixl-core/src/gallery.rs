//! Built-in sample images.
//!
//! The gallery is generated procedurally in memory, so loading never touches
//! the filesystem. Each entry is deterministic: the same name always yields
//! the same pixels, with every channel in `0..=255`.
//!
//! ```rust
//! use pixl_core::gallery::{gallery_names, load_image_from_gallery};
//!
//! let dog = load_image_from_gallery(Some("dog")).unwrap();
//! assert!(dog.height() > 100);
//! assert!(gallery_names().contains(&"pencils"));
//! ```

use crate::{Color, Error, Image, Result};
use rand::Rng;
use tracing::debug;

struct Entry {
    name: &'static str,
    width: u32,
    height: u32,
    render: fn(u32, u32, u32, u32) -> Color,
}

const GALLERY: &[Entry] = &[
    Entry {
        name: "dog",
        width: 320,
        height: 240,
        render: dog,
    },
    Entry {
        name: "pencils",
        width: 320,
        height: 200,
        render: pencils,
    },
    Entry {
        name: "flower",
        width: 256,
        height: 256,
        render: flower,
    },
    Entry {
        name: "sunset",
        width: 320,
        height: 180,
        render: sunset,
    },
    Entry {
        name: "checker",
        width: 128,
        height: 128,
        render: checker,
    },
];

/// Names of every gallery image, in a stable order.
pub fn gallery_names() -> Vec<&'static str> {
    GALLERY.iter().map(|e| e.name).collect()
}

/// Loads a gallery image by name (ASCII case-insensitive), or a random one
/// when `name` is `None`.
///
/// # Errors
///
/// Returns [`Error::UnknownGalleryImage`] when no entry has that name.
pub fn load_image_from_gallery(name: Option<&str>) -> Result<Image> {
    let entry = match name {
        Some(name) => GALLERY
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unknown_gallery_image(name, gallery_names().join(", ")))?,
        None => &GALLERY[rand::rng().random_range(0..GALLERY.len())],
    };

    debug!(
        name = entry.name,
        width = entry.width,
        height = entry.height,
        "Loading gallery image"
    );
    let (w, h, render) = (entry.width, entry.height, entry.render);
    Ok(Image::from_fn(w, h, |x, y| render(x, y, w, h)))
}

#[inline]
fn to_channel(v: f32) -> i32 {
    v.round().clamp(0.0, 255.0) as i32
}

#[inline]
fn lerp(a: Color, b: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    [
        to_channel(a[0] as f32 + (b[0] - a[0]) as f32 * t),
        to_channel(a[1] as f32 + (b[1] - a[1]) as f32 * t),
        to_channel(a[2] as f32 + (b[2] - a[2]) as f32 * t),
    ]
}

/// Inside the axis-aligned ellipse centred at (cx, cy) with radii (rx, ry).
#[inline]
fn in_ellipse(x: u32, y: u32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    let dx = (x as f32 - cx) / rx;
    let dy = (y as f32 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

// Brown dog on grass under a blue sky.
fn dog(x: u32, y: u32, w: u32, h: u32) -> Color {
    let (fw, fh) = (w as f32, h as f32);
    let horizon = fh * 0.55;

    let nose = in_ellipse(x, y, fw * 0.80, fh * 0.42, fw * 0.02, fh * 0.02);
    let eye = in_ellipse(x, y, fw * 0.72, fh * 0.36, fw * 0.015, fh * 0.02);
    let ear = in_ellipse(x, y, fw * 0.66, fh * 0.36, fw * 0.035, fh * 0.10);
    let head = in_ellipse(x, y, fw * 0.72, fh * 0.40, fw * 0.09, fh * 0.10);
    let body = in_ellipse(x, y, fw * 0.48, fh * 0.58, fw * 0.22, fh * 0.14);
    let leg = (y as f32) > fh * 0.62
        && (y as f32) < fh * 0.82
        && [0.32, 0.40, 0.56, 0.64]
            .iter()
            .any(|&lx| ((x as f32) - fw * lx).abs() < fw * 0.02);

    if nose || eye {
        [20, 15, 10]
    } else if ear {
        [96, 56, 28]
    } else if head || body || leg {
        [150, 98, 52]
    } else if (y as f32) < horizon {
        lerp([90, 150, 230], [190, 220, 250], y as f32 / horizon)
    } else {
        let t = (y as f32 - horizon) / (fh - horizon);
        let blade = if (x * 7 + y * 3) % 11 == 0 { 18 } else { 0 };
        let [r, g, b] = lerp([70, 160, 60], [30, 100, 30], t);
        [r, g + blade, b]
    }
}

// Vertical colored pencils with sharpened tips on a pale background.
fn pencils(x: u32, y: u32, w: u32, h: u32) -> Color {
    const BODIES: [Color; 8] = [
        [220, 40, 40],
        [240, 140, 30],
        [245, 220, 50],
        [60, 170, 70],
        [40, 120, 210],
        [110, 60, 170],
        [230, 100, 170],
        [90, 60, 40],
    ];
    let slot = (w / BODIES.len() as u32).max(1);
    let index = ((x / slot) as usize).min(BODIES.len() - 1);
    let within = x % slot;
    let margin = slot / 6;
    if within < margin || within >= slot - margin {
        return [235, 232, 222];
    }

    let tip_end = h / 5;
    let tip_wood = h / 3;
    let half_width = 0.5 - margin as f32 / slot as f32;
    let from_center = (within as f32 / slot as f32 - 0.5).abs();

    if y < tip_wood {
        // cone: narrower toward the top
        let allowed = half_width * y as f32 / tip_wood as f32;
        if from_center > allowed {
            return [235, 232, 222];
        }
        if y < tip_end {
            return BODIES[index];
        }
        return [222, 184, 135];
    }

    let shade = 1.0 - from_center * 0.6;
    let [r, g, b] = BODIES[index];
    [
        to_channel(r as f32 * shade),
        to_channel(g as f32 * shade),
        to_channel(b as f32 * shade),
    ]
}

// Six-petal flower over a dark green gradient.
fn flower(x: u32, y: u32, w: u32, h: u32) -> Color {
    let cx = w as f32 / 2.0;
    let cy = h as f32 / 2.0;
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    let r = (dx * dx + dy * dy).sqrt() / cx.min(cy);
    let theta = dy.atan2(dx);
    let petal = 0.55 + 0.35 * (3.0 * theta).cos().abs();

    if r < 0.18 {
        [250, 200, 40]
    } else if r < petal {
        lerp([250, 120, 180], [200, 40, 120], r / petal)
    } else {
        lerp([20, 80, 30], [10, 40, 15], y as f32 / h as f32)
    }
}

// Sky gradient with a setting sun and dark water.
fn sunset(x: u32, y: u32, w: u32, h: u32) -> Color {
    let horizon = h as f32 * 0.7;
    let fy = y as f32;

    let sun = h as f32 * 0.18;
    if fy < horizon && in_ellipse(x, y, w as f32 * 0.5, horizon, sun, sun) {
        return [255, 210, 90];
    }
    if fy < horizon {
        lerp([60, 30, 110], [250, 120, 50], fy / horizon)
    } else {
        let ripple = if (y / 3) % 2 == 0 { 10 } else { 0 };
        let t = (fy - horizon) / (h as f32 - horizon);
        let [r, g, b] = lerp([120, 50, 60], [20, 20, 50], t);
        [r + ripple, g, b + ripple]
    }
}

// 16px black and white squares.
fn checker(x: u32, y: u32, _w: u32, _h: u32) -> Color {
    if ((x / 16) + (y / 16)) % 2 == 0 {
        crate::color::WHITE
    } else {
        crate::color::BLACK
    }
}
