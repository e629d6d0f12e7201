//! Output canvas composition from matched tile placements
//!
//! Cells are bucketed per color-ID before any pasting happens, so each
//! distinct tile image is loaded from the work directory at most once
//! and released before the next loads. Peak memory holds the canvas
//! plus a single tile.

use image::{Rgba, RgbaImage, imageops};

use crate::io::error::{MosaicError, Result};
use crate::io::progress::ProgressReporter;
use crate::mosaic::assignment::Assignment;
use crate::palette::entry::{BACKGROUND_ID, ColorId};
use crate::palette::extractor::TileSet;
use crate::palette::idset::ColorIdSet;

/// Composites the final canvas from an assignment and a tile set
pub struct MosaicAssembler<'a> {
    tiles: &'a TileSet,
}

impl<'a> MosaicAssembler<'a> {
    /// Create an assembler over an extraction product
    #[must_use]
    pub const fn new(tiles: &'a TileSet) -> Self {
        Self { tiles }
    }

    /// Paint every cell of the assignment onto a background-filled canvas
    ///
    /// The canvas measures `width * tile_size` by `height * tile_size`
    /// and starts filled with the background color, which is what cells
    /// assigned the background ID keep. Tile IDs are visited in
    /// first-seen row-major order; each ID's tile is pasted at
    /// `(column * tile_size, row * tile_size)` for all of its cells.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::PaletteLookup`] when an assignment ID has
    /// no tile-backed palette entry, [`MosaicError::CorruptTile`] when a
    /// normalized tile fails to load back, and
    /// [`MosaicError::TileGeometry`] when a tile on disk no longer
    /// matches the recorded tile size.
    pub fn assemble(
        &self,
        assignment: &Assignment,
        progress: &mut dyn ProgressReporter,
    ) -> Result<RgbaImage> {
        let tile_size = self.tiles.tile_size;
        let width = assignment.width() * tile_size;
        let height = assignment.height() * tile_size;
        let mut canvas =
            RgbaImage::from_pixel(width, height, Rgba(self.tiles.palette.background()));

        let (order, cells_by_id) = bucket_cells(assignment, self.tiles.palette.len())?;

        progress.begin("Assembling mosaic", assignment.cell_count() as u64);
        let placed: u64 = cells_by_id.iter().map(|cells| cells.len() as u64).sum();
        progress.advance(assignment.cell_count() as u64 - placed);

        for id in order {
            let Some(cells) = cells_by_id.get(id as usize) else {
                return Err(MosaicError::PaletteLookup { id });
            };
            self.paste_tile(&mut canvas, id, cells, progress)?;
        }
        progress.finish();

        Ok(canvas)
    }

    /// Load one tile and paste it at every cell that chose it
    fn paste_tile(
        &self,
        canvas: &mut RgbaImage,
        id: ColorId,
        cells: &[(u32, u32)],
        progress: &dyn ProgressReporter,
    ) -> Result<()> {
        let entry = self
            .tiles
            .palette
            .get(id)
            .ok_or(MosaicError::PaletteLookup { id })?;
        let file_name = entry
            .tile
            .as_ref()
            .ok_or(MosaicError::PaletteLookup { id })?;
        let path = self.tiles.directory.join(file_name);

        let tile = image::open(&path)
            .map_err(|source| MosaicError::CorruptTile {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        let tile_size = self.tiles.tile_size;
        if tile.width() != tile_size || tile.height() != tile_size {
            return Err(MosaicError::TileGeometry {
                path,
                expected: tile_size,
                width: tile.width(),
                height: tile.height(),
            });
        }

        for &(column, row) in cells {
            let x = i64::from(column) * i64::from(tile_size);
            let y = i64::from(row) * i64::from(tile_size);
            imageops::replace(canvas, &tile, x, y);
            progress.advance(1);
        }
        Ok(())
    }
}

/// Bucket assignment cells per color-ID in first-seen row-major order
///
/// Background cells are skipped entirely; the initial canvas fill
/// already painted them.
fn bucket_cells(
    assignment: &Assignment,
    palette_len: usize,
) -> Result<(Vec<ColorId>, Vec<Vec<(u32, u32)>>)> {
    let mut seen = ColorIdSet::new(palette_len);
    let mut order = Vec::new();
    let mut cells_by_id = vec![Vec::new(); palette_len];

    for (row, column, id) in assignment.cells() {
        if id == BACKGROUND_ID {
            continue;
        }
        let Some(cells) = cells_by_id.get_mut(id as usize) else {
            return Err(MosaicError::PaletteLookup { id });
        };
        if seen.insert(id) {
            order.push(id);
        }
        cells.push((column, row));
    }

    Ok((order, cells_by_id))
}
