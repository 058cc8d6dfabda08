//! Dhall syntax CLI executable
//!
//! See the cli module documentation for detailed usage information.

use atrius_dhall_parser::cli::{Args, init_tracing, run_cli};
use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log_level);
    run_cli(args)?;
    Ok(())
}
