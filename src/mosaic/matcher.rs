//! Nearest-color matching with exact-pixel memoization

use std::collections::HashMap;

use crate::color::value;
use crate::io::error::Result;
use crate::io::progress::ProgressReporter;
use crate::mosaic::assignment::Assignment;
use crate::mosaic::target::TargetGrid;
use crate::palette::entry::{BACKGROUND_ID, ColorId, Palette};

/// Maps target-grid pixels to palette color-IDs
///
/// The distance search is brute force over the tile-backed entries; a
/// memo keyed by exact canonical RGBA tuple makes repeated pixels O(1),
/// which dominates on quantized natural images. The memo belongs to the
/// matcher and dies with it, so palettes stay shareable and immutable.
pub struct NearestColorMatcher<'a> {
    palette: &'a Palette,
    cache: HashMap<[u8; 4], ColorId>,
}

impl<'a> NearestColorMatcher<'a> {
    /// Create a matcher over a finished palette
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self {
            palette,
            cache: HashMap::new(),
        }
    }

    /// Assign the nearest color-ID to every cell of the target grid
    ///
    /// Cells are visited in row-major order. Fully transparent pixels
    /// take the reserved background ID without a search (alpha-aware
    /// mode only); everything else scans the palette with strict `<`
    /// comparison, so distance ties keep the earliest entry.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the grid's cell
    /// sequence disagrees with its own dimensions, which no
    /// [`TargetGrid`] produces.
    ///
    /// [`MosaicError::InvalidParameter`]: crate::io::error::MosaicError::InvalidParameter
    pub fn assign(
        &mut self,
        target: &TargetGrid,
        progress: &mut dyn ProgressReporter,
    ) -> Result<Assignment> {
        progress.begin("Matching colors", target.cell_count());

        let alpha_aware = target.mode().has_alpha();
        let mut ids = Vec::with_capacity(target.cell_count() as usize);
        for (_, _, pixel) in target.cells() {
            let id = if alpha_aware && pixel[3] == 0 {
                BACKGROUND_ID
            } else {
                self.lookup(pixel)
            };
            ids.push(id);
            progress.advance(1);
        }
        progress.finish();

        Assignment::from_row_major(target.width(), target.height(), ids)
    }

    /// Memoized nearest lookup for one pixel
    fn lookup(&mut self, pixel: [u8; 4]) -> ColorId {
        let key = value::canonical(pixel, self.palette.mode());
        if let Some(&id) = self.cache.get(&key) {
            return id;
        }
        let id = nearest(self.palette, key);
        self.cache.insert(key, id);
        id
    }

    /// Number of distinct pixel values memoized so far
    #[must_use]
    pub fn cached_colors(&self) -> usize {
        self.cache.len()
    }
}

/// Brute-force nearest tile-backed entry with strict `<` tie-breaking
///
/// The background placeholder never competes; cells only receive it
/// through the transparency shortcut.
pub(crate) fn nearest(palette: &Palette, pixel: [u8; 4]) -> ColorId {
    let mut best_distance = u32::MAX;
    let mut best_id = BACKGROUND_ID;
    for entry in palette.matchable() {
        let distance = value::squared_distance(pixel, entry.color);
        if distance < best_distance {
            best_distance = distance;
            best_id = entry.id;
        }
    }
    best_id
}
