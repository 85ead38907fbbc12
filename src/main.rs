//! prt-retrieve CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, hand off to
//! the launch runner, and exit with appropriate status. For programmatic
//! use, prefer the library API (`prt_retrieve::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
