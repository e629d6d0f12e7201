//! CLI entry point for the photo mosaic builder

use clap::Parser;
use tessera::io::cli::{Cli, MosaicRunner};

fn main() -> tessera::Result<()> {
    let cli = Cli::parse();
    let mut runner = MosaicRunner::new(cli);
    runner.run()
}
