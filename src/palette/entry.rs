//! Palette records mapping color-IDs to tile files
//!
//! The palette is built once during extraction and consumed read-only by
//! matching and assembly. Entry 0 is the reserved background placeholder;
//! tile-backed entries follow in first-seen canonical order, so a rerun
//! over the same directory reproduces the same IDs.

use std::collections::HashMap;

use crate::color::mode::ColorMode;
use crate::color::value;

/// Dense identifier for one palette color
pub type ColorId = u32;

/// Reserved identifier of the background placeholder entry
pub const BACKGROUND_ID: ColorId = 0;

/// One palette record: a representative color and its originating tile
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorEntry {
    /// Dense identifier, 0 for the background placeholder
    pub id: ColorId,
    /// Canonical RGBA color (alpha pinned to 255 in opaque mode)
    pub color: [u8; 4],
    /// File name of the normalized tile copy, `None` for the background
    pub tile: Option<String>,
}

/// Ordered, deduplicated collection of representative tile colors
///
/// The first tile to produce a given average color owns that color's ID;
/// later duplicates are discarded and never become selectable. The
/// background fill occupies ID 0 from construction, so a tile averaging
/// exactly the fill color is a duplicate too.
#[derive(Clone, Debug)]
pub struct Palette {
    mode: ColorMode,
    entries: Vec<ColorEntry>,
    by_color: HashMap<[u8; 4], ColorId>,
}

impl Palette {
    /// Create a palette holding only the reserved background entry
    #[must_use]
    pub fn new(mode: ColorMode, background: [u8; 4]) -> Self {
        let background = value::canonical(background, mode);
        let mut by_color = HashMap::new();
        by_color.insert(background, BACKGROUND_ID);
        Self {
            mode,
            entries: vec![ColorEntry {
                id: BACKGROUND_ID,
                color: background,
                tile: None,
            }],
            by_color,
        }
    }

    /// Record a tile's representative color
    ///
    /// Returns the newly assigned ID, or `None` when the exact canonical
    /// color is already owned by an earlier entry (or by the background
    /// fill) and the tile is therefore discarded.
    pub fn insert(&mut self, color: [u8; 4], tile: String) -> Option<ColorId> {
        let color = value::canonical(color, self.mode);
        if self.by_color.contains_key(&color) {
            return None;
        }
        let id = self.entries.len() as ColorId;
        self.by_color.insert(color, id);
        self.entries.push(ColorEntry {
            id,
            color,
            tile: Some(tile),
        });
        Some(id)
    }

    /// Entry for an ID, if the ID is known
    #[must_use]
    pub fn get(&self, id: ColorId) -> Option<&ColorEntry> {
        self.entries.get(id as usize)
    }

    /// Channel layout this palette was built under
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Canonical background fill color (the color of entry 0)
    #[must_use]
    pub fn background(&self) -> [u8; 4] {
        self.entries
            .first()
            .map_or([0, 0, 0, 255], |entry| entry.color)
    }

    /// Total number of entries, background included
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries (never true once constructed)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tile-backed entries in ID order; the background never competes
    pub fn matchable(&self) -> impl Iterator<Item = &ColorEntry> {
        self.entries.iter().filter(|entry| entry.tile.is_some())
    }

    /// Number of tile-backed entries
    #[must_use]
    pub fn matchable_len(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// All entries in ID order, background first
    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
