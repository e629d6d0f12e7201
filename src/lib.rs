//! Photo mosaic assembly from tile image collections
//!
//! The system normalizes a directory of candidate tiles into uniform
//! squares, reduces each to one representative color, matches every cell
//! of the resized source image to its nearest palette color, and pastes
//! the chosen tiles onto a background-filled canvas. Stages exchange
//! immutable value objects and run deterministically for a given tile
//! directory and source.

#![forbid(unsafe_code)]

/// Channel-layout decision, fill handling, and color arithmetic
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Target quantization, matching, assembly, and orchestration
pub mod mosaic;
/// Palette construction and tile extraction
pub mod palette;

pub use io::error::{MosaicError, Result};
