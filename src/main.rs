//! CLI entry point for the alpona mandala generator

use alpona::io::cli::{BatchGenerator, Cli};
use alpona::io::logging::{LoggingConfig, init_logging};
use clap::Parser;
use std::io::IsTerminal;

fn main() -> alpona::Result<()> {
    let cli = Cli::parse();
    init_logging(&LoggingConfig {
        filter: cli.log_level.clone(),
        ansi: std::io::stderr().is_terminal(),
    });

    let mut generator = BatchGenerator::new(cli);
    generator.run()?;
    Ok(())
}
