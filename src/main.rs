//! CLI entry point for the cell-grid morph animation generator

use clap::Parser;
use surrafication::io::cli::{Cli, MorphProcessor};

fn main() -> surrafication::Result<()> {
    let cli = Cli::parse();
    let mut processor = MorphProcessor::new(cli);
    processor.process()
}
