//! Command-line argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const GENERATE_EXAMPLE: &str = "\
Examples:
  # opskit generate TEMPLATE_KIND
  opskit generate artifact_builder_pod -d $(pwd)/artifact_builder_pod.json \\
      --namespace ci --image registry.local/builder --tag 1.4.0 --port 8080";

/// opskit - a single utility for a mix of developer and operations tasks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "opskit")]
pub struct Args {
    /// Config file (default is $HOME/.opskit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Render without writing any files
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a deployment resource template
    #[command(after_help = GENERATE_EXAMPLE)]
    Generate(GenerateArgs),

    /// List the template kinds that can be generated
    List,
}

/// Arguments for `generate`
///
/// Presence of the kind and the required options is checked by the
/// dispatcher rather than by clap, so every failure is reported the same way.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Kind of template to generate
    #[arg(value_name = "TEMPLATE_KIND")]
    pub kind: Vec<String>,

    /// Full path to the output file
    #[arg(short = 'd', long)]
    pub dest: Option<PathBuf>,

    /// Namespace on which to perform the operations
    #[arg(long)]
    pub namespace: Option<String>,

    /// Docker image name
    #[arg(long)]
    pub image: Option<String>,

    /// Docker image tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Application port to be exposed
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub port: i64,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
