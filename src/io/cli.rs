//! Command-line interface for composing photo mosaics

use crate::color::mode::FillColor;
use crate::io::configuration::{
    DEFAULT_FILL, DEFAULT_GRID_CELLS, DEFAULT_OUTPUT, DEFAULT_TILE_SIZE,
};
use crate::io::error::Result;
use crate::io::image::{Compression, save_canvas};
use crate::io::progress::{ConsoleProgress, ProgressReporter, SilentProgress};
use crate::io::tiles::{first_available_path, remove_directory};
use crate::mosaic::pipeline::{MosaicConfig, MosaicPipeline};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tessera")]
#[command(version, about = "Rebuild an image as a photo mosaic of small tiles")]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Source image to rebuild as a mosaic
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of candidate tile images
    #[arg(short, long, value_name = "DIR")]
    pub tiles: Option<PathBuf>,

    /// Cell count along the target's longest side
    #[arg(short, long, default_value_t = DEFAULT_GRID_CELLS)]
    pub cells: u32,

    /// Edge length of normalized tiles, in pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Output path; an existing file is never overwritten, a numbered
    /// sibling is written instead
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Background fill as R,G,B or R,G,B,A; four components plus a
    /// png/gif source select alpha-aware output
    #[arg(short, long, default_value = DEFAULT_FILL)]
    pub fill: FillColor,

    /// Tiles are already square and uniformly sized; copy them verbatim
    #[arg(long)]
    pub square_tiles: bool,

    /// Keep the normalized tile directory after the mosaic is saved
    #[arg(long)]
    pub keep_tiles: bool,

    /// PNG compression effort for the saved mosaic
    #[arg(long, value_enum, default_value_t = Compression::Default)]
    pub compression: Compression,

    /// Suppress progress bars and the completion message
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration from the parsed arguments
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            source_image: self.source.clone(),
            tile_source: self.tiles.clone(),
            grid_cells: self.cells,
            tile_size: self.tile_size,
            fill: self.fill,
            tiles_are_square: self.square_tiles,
        }
    }
}

/// Orchestrates one mosaic run from parsed arguments
///
/// Owns the glue around the core pipeline: progress selection,
/// collision-free output naming, work-directory cleanup, and the
/// completion message.
pub struct MosaicRunner {
    cli: Cli,
    progress: Box<dyn ProgressReporter>,
}

impl MosaicRunner {
    /// Create a runner, selecting progress output from the quiet flag
    pub fn new(cli: Cli) -> Self {
        let progress: Box<dyn ProgressReporter> = if cli.should_show_progress() {
            Box::new(ConsoleProgress::new())
        } else {
            Box::new(SilentProgress)
        };

        Self { cli, progress }
    }

    /// Execute the configured run end to end
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation, any pipeline stage,
    /// saving the mosaic, or removing the work directory fails
    // Allow print for the user-facing completion message
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let pipeline = MosaicPipeline::new(self.cli.to_config())?;
        let result = pipeline.run(self.progress.as_mut())?;

        let output = first_available_path(&self.cli.output);
        save_canvas(&result.canvas, result.mode, &output, self.cli.compression)?;

        if !self.cli.keep_tiles {
            remove_directory(&result.tile_directory)?;
        }

        if !self.cli.quiet {
            eprintln!("Mosaic written to {}", output.display());
        }

        Ok(())
    }
}
