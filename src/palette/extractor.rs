//! Tile normalization and palette construction
//!
//! Walks the tile directory in canonical order, persists square copies at
//! the configured pixel size into a fresh work directory, and folds each
//! tile's representative color into the palette. Decoding and resizing
//! fan out across the rayon pool; ID assignment stays a sequential fold
//! over the ordered results so reruns produce identical palettes.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::color::mode::ColorMode;
use crate::color::value;
use crate::io::error::{MosaicError, Result};
use crate::io::progress::ProgressReporter;
use crate::io::tiles;
use crate::palette::entry::Palette;

/// Product of one extraction run
///
/// Couples the work directory with the pixel size its tiles actually
/// have, so assembly never re-derives geometry from directory listings
/// or loop state.
#[derive(Clone, Debug)]
pub struct TileSet {
    /// Directory holding the normalized tile copies
    pub directory: PathBuf,
    /// Edge length of every tile in the directory, in pixels
    pub tile_size: u32,
    /// Palette built from the tiles, background entry included
    pub palette: Palette,
}

/// Normalizes tile images and builds the palette for one run
#[derive(Clone, Copy, Debug)]
pub struct TileExtractor {
    tile_size: u32,
    mode: ColorMode,
    fill: [u8; 4],
    tiles_are_square: bool,
}

/// Per-tile product of the parallel normalization pass
struct NormalizedTile {
    file_name: String,
    path: PathBuf,
    color: [u8; 4],
    width: u32,
    height: u32,
}

impl TileExtractor {
    /// Configure an extractor
    ///
    /// With `tiles_are_square` set, tiles are asserted to be square and
    /// uniformly sized already: they are copied verbatim and the
    /// configured `tile_size` is superseded by their measured edge.
    #[must_use]
    pub const fn new(
        tile_size: u32,
        mode: ColorMode,
        fill: [u8; 4],
        tiles_are_square: bool,
    ) -> Self {
        Self {
            tile_size,
            mode,
            fill,
            tiles_are_square,
        }
    }

    /// Normalize every tile under `tile_dir` into `work_dir` and build
    /// the palette
    ///
    /// Canonical order is the lexicographic file-name order of the
    /// directory; it decides which tile owns a duplicated average color.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyTileSet`] when the directory holds no
    /// files or every tile duplicates an earlier color,
    /// [`MosaicError::CorruptTile`] when a tile fails to decode,
    /// [`MosaicError::TileGeometry`] when pre-squared tiles disagree on
    /// dimensions, and [`MosaicError::FileSystem`] or
    /// [`MosaicError::ImageExport`] for work-directory failures.
    pub fn extract(
        &self,
        tile_dir: &Path,
        work_dir: &Path,
        progress: &mut dyn ProgressReporter,
    ) -> Result<TileSet> {
        let files = tiles::list_tile_files(tile_dir)?;
        tiles::create_directory(work_dir)?;

        progress.begin("Preparing tiles", files.len() as u64);
        let reporter: &dyn ProgressReporter = progress;
        let normalized = files
            .par_iter()
            .map(|path| {
                let tile = self.normalize_tile(path, work_dir);
                reporter.advance(1);
                tile
            })
            .collect::<Result<Vec<_>>>()?;
        progress.finish();

        let tile_size = self.resolve_tile_size(&normalized)?;

        let mut palette = Palette::new(self.mode, self.fill);
        for tile in normalized {
            palette.insert(tile.color, tile.file_name);
        }

        if palette.matchable_len() == 0 {
            return Err(MosaicError::EmptyTileSet {
                path: tile_dir.to_path_buf(),
            });
        }

        Ok(TileSet {
            directory: work_dir.to_path_buf(),
            tile_size,
            palette,
        })
    }

    /// Decode one tile, persist its normalized copy, and measure its color
    fn normalize_tile(&self, path: &Path, work_dir: &Path) -> Result<NormalizedTile> {
        let file_name = tiles::file_name_of(path)?;
        let destination = work_dir.join(&file_name);

        let tile = image::open(path).map_err(|source| MosaicError::CorruptTile {
            path: path.to_path_buf(),
            source,
        })?;

        if self.tiles_are_square {
            // Verbatim copy; geometry is validated across the whole set
            // once every tile has been measured.
            let (width, height) = tile.dimensions();
            std::fs::copy(path, &destination).map_err(|source| MosaicError::FileSystem {
                path: destination.clone(),
                operation: "copy tile",
                source,
            })?;
            let color = value::average_color(&tile.to_rgba8());
            return Ok(NormalizedTile {
                file_name,
                path: path.to_path_buf(),
                color,
                width,
                height,
            });
        }

        let resized =
            center_square(&tile).resize_exact(self.tile_size, self.tile_size, FilterType::Lanczos3);
        resized
            .save(&destination)
            .map_err(|source| MosaicError::ImageExport {
                path: destination.clone(),
                source,
            })?;

        let color = value::average_color(&resized.to_rgba8());
        Ok(NormalizedTile {
            file_name,
            path: path.to_path_buf(),
            color,
            width: self.tile_size,
            height: self.tile_size,
        })
    }

    /// Edge length shared by every normalized tile
    ///
    /// Normalizing runs force the configured size; verbatim runs measure
    /// the first tile and require every other tile to agree with it.
    fn resolve_tile_size(&self, normalized: &[NormalizedTile]) -> Result<u32> {
        if !self.tiles_are_square {
            return Ok(self.tile_size);
        }

        let mut size = None;
        for tile in normalized {
            let expected = size.unwrap_or(tile.width);
            if tile.width != tile.height || tile.width != expected {
                return Err(MosaicError::TileGeometry {
                    path: tile.path.clone(),
                    expected,
                    width: tile.width,
                    height: tile.height,
                });
            }
            size = Some(tile.width);
        }
        Ok(size.unwrap_or(self.tile_size))
    }
}

/// Largest centered square crop of an image
///
/// Crop box `((w-s)/2, (h-s)/2)` with side `s = min(w, h)`; a square
/// input crops to itself.
pub(crate) fn center_square(image: &DynamicImage) -> DynamicImage {
    let (width, height) = image.dimensions();
    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    image.crop_imm(left, top, side, side)
}
