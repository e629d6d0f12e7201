//! Palette construction from tile image collections

/// Color-ID records and the deduplicated palette
pub mod entry;
/// Tile normalization and palette extraction
pub mod extractor;
/// Bitvec-backed color-ID membership set
pub mod idset;

pub use entry::{BACKGROUND_ID, ColorEntry, ColorId, Palette};
pub use extractor::{TileExtractor, TileSet};
