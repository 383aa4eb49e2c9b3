//! # opskit
//!
//! A single command-line utility for a mix of developer and operations tasks.
//! This library holds the template generator: a registry of keyed generator
//! functions, a dispatcher that validates invocations against it, and the
//! file writer that persists the rendered artifact.
//!
//! ## Features
//!
//! - Closed registry of template kinds, built once at startup
//! - Argument validation that completes before any generator runs
//! - Kubernetes pod manifest rendering
//! - Dry-run mode and optional TOML configuration
//!
//! ## Example
//!
//! ```no_run
//! use opskit::{cli::GenerateArgs, core::{Dispatcher, Registry}};
//!
//! let registry = Registry::builtin();
//! let dispatcher = Dispatcher::new(&registry);
//! let invocation = dispatcher.validate(&GenerateArgs {
//!     kind: vec!["artifact_builder_pod".to_string()],
//!     dest: Some("pod.json".into()),
//!     namespace: Some("ci".to_string()),
//!     image: Some("registry.local/builder".to_string()),
//!     tag: Some("1.4.0".to_string()),
//!     port: 8080,
//! })?;
//! dispatcher.run(&invocation, false)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
