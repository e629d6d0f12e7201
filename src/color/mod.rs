//! Color model shared by every pipeline stage

/// Channel-layout decision and fill-color handling
pub mod mode;
/// Distance and averaging over canonical RGBA tuples
pub mod value;

pub use mode::{ColorMode, FillColor};
