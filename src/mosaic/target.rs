//! Target grid derivation from the source image
//!
//! The source is resized so that one pixel corresponds to one output
//! cell; the resize itself is the cell quantization and no separate
//! block-averaging pass runs afterwards.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::color::mode::ColorMode;
use crate::io::error::{MosaicError, Result};

/// The source image resized to one RGBA pixel per grid cell
#[derive(Clone, Debug)]
pub struct TargetGrid {
    pixels: RgbaImage,
    mode: ColorMode,
}

impl TargetGrid {
    /// Load the source image and quantize it to the cell grid
    ///
    /// The grid's long side receives exactly `cells` cells; the short
    /// side scales proportionally, truncating, with a floor of one cell.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::ImageLoad`] when the source cannot be read
    /// or decoded.
    pub fn from_source(path: &Path, cells: u32, mode: ColorMode) -> Result<Self> {
        let source = image::open(path).map_err(|source| MosaicError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = source.to_rgba8();
        let (grid_width, grid_height) = grid_dimensions(rgba.width(), rgba.height(), cells);
        let pixels = imageops::resize(&rgba, grid_width, grid_height, FilterType::Lanczos3);
        Ok(Self { pixels, mode })
    }

    /// Wrap an already-quantized image as a grid
    #[must_use]
    pub const fn from_image(pixels: RgbaImage, mode: ColorMode) -> Self {
        Self { pixels, mode }
    }

    /// Grid width in cells
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Grid height in cells
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Total number of cells
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Channel layout decided for this run
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Cells in row-major order as `(column, row, color)`
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, [u8; 4])> + '_ {
        self.pixels
            .enumerate_pixels()
            .map(|(x, y, pixel)| (x, y, pixel.0))
    }
}

/// Cell-grid dimensions for a source of `width x height` pixels
///
/// Integer ratio `side * cells / long_side` keeps the long side exactly
/// at `cells`; the short side truncates, floored at one cell.
pub(crate) const fn grid_dimensions(width: u32, height: u32, cells: u32) -> (u32, u32) {
    let long = if width >= height { width } else { height };
    if long == 0 {
        return (1, 1);
    }
    (scaled(width, cells, long), scaled(height, cells, long))
}

const fn scaled(side: u32, cells: u32, long: u32) -> u32 {
    let value = (side as u64 * cells as u64 / long as u64) as u32;
    if value == 0 { 1 } else { value }
}
