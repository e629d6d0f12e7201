//! Core pipeline stages from target quantization to canvas composition

/// Canvas composition from matched tile placements
pub mod assembler;
/// Row-major color-ID assignment grid
pub mod assignment;
/// Nearest-color matching with memoization
pub mod matcher;
/// End-to-end orchestration and run configuration
pub mod pipeline;
/// Target grid derivation from the source image
pub mod target;

pub use pipeline::{MosaicConfig, MosaicPipeline, MosaicResult};
