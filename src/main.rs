//! CLI entry point for the tour enumerator

use clap::Parser;
use pyramid_tour::io::cli::{Cli, TourRunner};

fn main() -> pyramid_tour::Result<()> {
    let cli = Cli::parse();
    let mut runner = TourRunner::new(cli);
    runner.run()
}
