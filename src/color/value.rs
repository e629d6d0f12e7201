//! Color arithmetic over canonical RGBA tuples
//!
//! Every stage works on `[u8; 4]` values. Opaque mode pins alpha to full
//! opacity, so exact-tuple comparison behaves identically across modes and
//! a single memo key type serves both.

use image::RgbaImage;

use crate::color::mode::ColorMode;

/// Squared Euclidean distance over the first three channels
///
/// Alpha never participates in distance; fully transparent pixels are
/// short-circuited before any distance search runs.
#[must_use]
pub fn squared_distance(a: [u8; 4], b: [u8; 4]) -> u32 {
    a.iter()
        .zip(b.iter())
        .take(3)
        .map(|(&x, &y)| {
            let diff = u32::from(x.abs_diff(y));
            diff * diff
        })
        .sum()
}

/// Box-average of every pixel in an image
///
/// This is the representative color a 1x1 box resize would produce:
/// per-channel sums divided by the pixel count, rounding half up. An empty
/// image averages to transparent black.
#[must_use]
pub fn average_color(image: &RgbaImage) -> [u8; 4] {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return [0, 0, 0, 0];
    }

    let mut sums = [0_u64; 4];
    for pixel in image.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += u64::from(channel);
        }
    }

    sums.map(|sum| ((sum + count / 2) / count) as u8)
}

/// Canonical form of a color under the decided mode
///
/// Opaque mode pins alpha to full opacity so palette deduplication and
/// memo keys compare exactly the three meaningful channels.
#[must_use]
pub const fn canonical(color: [u8; 4], mode: ColorMode) -> [u8; 4] {
    let [r, g, b, a] = color;
    match mode {
        ColorMode::Rgb => [r, g, b, 255],
        ColorMode::Rgba => [r, g, b, a],
    }
}
