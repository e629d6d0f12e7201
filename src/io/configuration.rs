//! Run constants and configurable parameter defaults

// Default values for configurable parameters
/// Default cell count along the target's longest side
pub const DEFAULT_GRID_CELLS: u32 = 100;
/// Default edge length of normalized tiles, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Default output path for the composed mosaic
pub const DEFAULT_OUTPUT: &str = "mosaic.png";
/// Default transparent/background fill (fully transparent black)
pub const DEFAULT_FILL: &str = "0,0,0,0";

// Safety limits to prevent excessive memory allocation
/// Maximum allowed cell count along the long side
pub const MAX_GRID_CELLS: u32 = 10_000;
/// Maximum allowed tile pixel size
pub const MAX_TILE_SIZE: u32 = 1_024;
