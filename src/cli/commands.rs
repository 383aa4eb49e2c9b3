//! Command implementations for the CLI

use crate::{
    cli::{Command, GenerateArgs},
    config::Config,
    core::{Dispatcher, Registry},
};
use anyhow::Context;
use std::io::{self, Write};
use tracing::{info, instrument};

/// Execute the appropriate command based on CLI arguments
#[instrument(skip_all)]
pub fn execute_command(
    config: &Config,
    registry: &Registry,
    command: &Command,
) -> anyhow::Result<()> {
    match command {
        Command::Generate(args) => execute_generate_command(config, registry, args),
        Command::List => execute_list_command(registry, &mut io::stdout().lock()),
    }
}

/// Execute the generate command
#[instrument(skip(config, registry, args), fields(kind = ?args.kind))]
fn execute_generate_command(
    config: &Config,
    registry: &Registry,
    args: &GenerateArgs,
) -> anyhow::Result<()> {
    let dispatcher = Dispatcher::new(registry);

    let invocation = dispatcher
        .validate(args)
        .context("Invalid generate invocation")?;

    info!(
        "Generating {} template to: {}",
        invocation.kind,
        invocation.dest.display()
    );

    let report = dispatcher
        .run(&invocation, config.dry_run)
        .with_context(|| format!("Failed to generate {} template", invocation.kind))?;

    if report.written {
        info!(
            "{} template generated successfully ({} bytes written to {})",
            report.kind,
            report.payload_len,
            report.dest.display()
        );
    } else {
        info!(
            "Dry run completed, {} template rendered ({} bytes)",
            report.kind, report.payload_len
        );
    }

    Ok(())
}

/// Execute the list command
fn execute_list_command<W: Write>(registry: &Registry, out: &mut W) -> anyhow::Result<()> {
    for kind in registry.kinds() {
        writeln!(out, "{kind}").context("Failed to write template kinds")?;
    }
    Ok(())
}
