//! End-to-end orchestration and run configuration
//!
//! The pipeline validates a configuration eagerly, decides the channel
//! layout once, then sequences extraction, matching, and assembly. The
//! stages exchange immutable value objects (tile set, target grid,
//! assignment), so nothing downstream can disturb what an earlier stage
//! produced.

use std::path::PathBuf;

use image::RgbaImage;

use crate::color::mode::{ColorMode, FillColor};
use crate::io::configuration::{MAX_GRID_CELLS, MAX_TILE_SIZE};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::io::tiles;
use crate::mosaic::assembler::MosaicAssembler;
use crate::mosaic::matcher::NearestColorMatcher;
use crate::mosaic::target::TargetGrid;
use crate::palette::extractor::TileExtractor;

/// Everything one mosaic run needs to know
///
/// The tile source stays optional at the type level so a caller that
/// never configured one gets a configuration error up front instead of
/// a missing-path failure somewhere mid-run.
#[derive(Clone, Debug)]
pub struct MosaicConfig {
    /// Source image to rebuild as a mosaic
    pub source_image: PathBuf,
    /// Directory of candidate tile images
    pub tile_source: Option<PathBuf>,
    /// Cell count along the target's longest side
    pub grid_cells: u32,
    /// Edge length of normalized tiles, in pixels
    pub tile_size: u32,
    /// Transparent/background fill, three or four components
    pub fill: FillColor,
    /// Tiles are already square and uniformly sized; copy them verbatim
    pub tiles_are_square: bool,
}

/// Product of a completed run
#[derive(Clone, Debug)]
pub struct MosaicResult {
    /// The composed mosaic
    pub canvas: RgbaImage,
    /// Channel layout the canvas was composed under
    pub mode: ColorMode,
    /// Work directory of normalized tiles; callers may keep or remove it
    pub tile_directory: PathBuf,
}

/// Sequences extraction, matching, and assembly over one configuration
#[derive(Clone, Debug)]
pub struct MosaicPipeline {
    config: MosaicConfig,
    tile_source: PathBuf,
    mode: ColorMode,
    fill: [u8; 4],
}

impl MosaicPipeline {
    /// Validate a configuration and decide the channel layout
    ///
    /// All parameter and path-existence checks happen here, before any
    /// image I/O.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoTileSource`] when no tile directory was
    /// configured, [`MosaicError::InvalidParameter`] for zero or
    /// oversized cell counts and tile sizes, and
    /// [`MosaicError::MissingResource`] when the source image or tile
    /// directory does not exist.
    pub fn new(config: MosaicConfig) -> Result<Self> {
        let tile_source = config
            .tile_source
            .clone()
            .ok_or(MosaicError::NoTileSource)?;

        validate_span("grid cells", config.grid_cells, MAX_GRID_CELLS)?;
        validate_span("tile size", config.tile_size, MAX_TILE_SIZE)?;

        if !config.source_image.exists() {
            return Err(MosaicError::MissingResource {
                role: "source image",
                path: config.source_image.clone(),
            });
        }
        if !tile_source.is_dir() {
            return Err(MosaicError::MissingResource {
                role: "tile directory",
                path: tile_source,
            });
        }

        let mode = ColorMode::decide(&config.source_image, config.fill);
        let fill = config.fill.canonical(mode);
        Ok(Self {
            config,
            tile_source,
            mode,
            fill,
        })
    }

    /// Channel layout decided for this run
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Canonical background fill the canvas will start from
    #[must_use]
    pub const fn fill(&self) -> [u8; 4] {
        self.fill
    }

    /// Run extraction, matching, and assembly to completion
    ///
    /// The work directory of normalized tiles is a fresh sibling of the
    /// tile source and is handed to the caller inside the result; this
    /// method never deletes it.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from any stage; every failure is
    /// fatal and nothing partial is produced.
    pub fn run(&self, progress: &mut dyn ProgressReporter) -> Result<MosaicResult> {
        let work_dir = tiles::first_available_path(&self.tile_source);
        let extractor = TileExtractor::new(
            self.config.tile_size,
            self.mode,
            self.fill,
            self.config.tiles_are_square,
        );
        let tile_set = extractor.extract(&self.tile_source, &work_dir, progress)?;

        let target = TargetGrid::from_source(
            &self.config.source_image,
            self.config.grid_cells,
            self.mode,
        )?;

        let assignment = {
            let mut matcher = NearestColorMatcher::new(&tile_set.palette);
            matcher.assign(&target, progress)?
        };

        let assembler = MosaicAssembler::new(&tile_set);
        let canvas = assembler.assemble(&assignment, progress)?;

        Ok(MosaicResult {
            canvas,
            mode: self.mode,
            tile_directory: tile_set.directory,
        })
    }
}

/// Bounds check for a positive run parameter
fn validate_span(parameter: &'static str, value: u32, limit: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid_parameter(parameter, &value, &"must be positive"));
    }
    if value > limit {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("exceeds the limit of {limit}"),
        ));
    }
    Ok(())
}
