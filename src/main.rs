#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use opskit::{cli, config::Config, core::Registry, setup_logging};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Initialize configuration
    let config = Config::from_args(&args)?;

    // Setup logging based on debug flag
    setup_logging(config.debug)?;

    // Build the generator table once; it is read-only from here on
    let registry = Registry::builtin();

    // Execute the appropriate command
    cli::execute_command(&config, &registry, &args.command)
}
