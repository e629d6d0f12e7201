//! Error types for mosaic construction
//!
//! Every failure is fatal: the pipeline is a batch transform, so errors
//! unwind the whole run and name the resource that failed rather than
//! carrying retry or partial-result policy.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::palette::entry::ColorId;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// A required input path does not exist
    MissingResource {
        /// What the path was supposed to provide
        role: &'static str,
        /// The missing path
        path: PathBuf,
    },

    /// No tile source was configured
    NoTileSource,

    /// Run parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load the source image from the filesystem
    ImageLoad {
        /// Path to the source image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A tile image could not be decoded
    CorruptTile {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A tile's dimensions disagree with the expected tile geometry
    ///
    /// Raised when pre-squared tiles are not square or not uniformly
    /// sized, and when a normalized tile changes on disk mid-run.
    TileGeometry {
        /// Path to the offending tile
        path: PathBuf,
        /// Edge length every tile must have
        expected: u32,
        /// Actual width found
        width: u32,
        /// Actual height found
        height: u32,
    },

    /// An assignment color-ID does not resolve to a placeable tile
    PaletteLookup {
        /// The unresolvable color-ID
        id: ColorId,
    },

    /// The tile directory contains no usable tile images
    EmptyTileSet {
        /// The directory that was scanned
        path: PathBuf,
    },

    /// Failed to encode or write an image to disk
    ImageExport {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingResource { role, path } => {
                write!(f, "Missing {role}: '{}'", path.display())
            }
            Self::NoTileSource => {
                write!(
                    f,
                    "No tile source configured: supply a directory of tile images"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::CorruptTile { path, source } => {
                write!(f, "Failed to decode tile '{}': {source}", path.display())
            }
            Self::TileGeometry {
                path,
                expected,
                width,
                height,
            } => {
                write!(
                    f,
                    "Tile '{}' is {width}x{height}, expected {expected}x{expected}",
                    path.display()
                )
            }
            Self::PaletteLookup { id } => {
                write!(f, "Color id {id} does not resolve to a placeable tile")
            }
            Self::EmptyTileSet { path } => {
                write!(f, "No usable tile images in '{}'", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::CorruptTile { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on a path
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> MosaicError {
    MosaicError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
