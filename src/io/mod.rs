//! Input/output operations, error handling, and user-facing reporting

/// Command-line interface and run orchestration
pub mod cli;
/// Run constants and configurable defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Canvas export with format-aware encoding
pub mod image;
/// Stage progress reporting
pub mod progress;
/// Tile listing and collision-free path allocation
pub mod tiles;
