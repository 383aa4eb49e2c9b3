//! Argument validation and generator dispatch
//!
//! Runs one invocation through validate, dispatch and persist, in that order.
//! Nothing touches the filesystem until validation and rendering succeed.

use crate::{
    cli::GenerateArgs,
    core::{
        registry::Registry,
        template::{Artifact, TemplateParams},
    },
    error::{GenerateError, Result},
    utils::fs::FileSystemUtils,
};
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// A validated generate request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Registered template kind
    pub kind: String,
    /// Output file path
    pub dest: PathBuf,
    /// Parameters passed through to the generator
    pub params: TemplateParams,
}

/// Outcome of a completed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Template kind that was rendered
    pub kind: String,
    /// Output file path
    pub dest: PathBuf,
    /// Size of the rendered payload
    pub payload_len: usize,
    /// Whether the payload was written (false on dry run)
    pub written: bool,
}

/// Routes a validated request to exactly one generator
#[derive(Debug)]
pub struct Dispatcher<'a> {
    registry: &'a Registry,
    fs_utils: FileSystemUtils,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over the given registry
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            fs_utils: FileSystemUtils::new(),
        }
    }

    /// Check the invocation shape against the registry
    ///
    /// Rules are applied in order: positional count, kind membership, then
    /// required options (`dest`, `namespace`, `image`, `tag`).
    #[instrument(skip(self, args), fields(kind = ?args.kind))]
    pub fn validate(&self, args: &GenerateArgs) -> Result<Invocation> {
        let kind = match args.kind.as_slice() {
            [] => return Err(GenerateError::MissingKind),
            [kind] => kind,
            extra => return Err(GenerateError::too_many_args(extra.iter().cloned())),
        };

        if !self.registry.contains(kind) {
            return Err(GenerateError::unknown_kind(
                kind.clone(),
                self.registry.kinds(),
            ));
        }

        let dest = required("dest", args.dest.as_ref())?;
        let namespace = required("namespace", args.namespace.as_ref())?;
        let image = required("image", args.image.as_ref())?;
        let tag = required("tag", args.tag.as_ref())?;

        debug!("Validated invocation for kind '{}'", kind);

        Ok(Invocation {
            kind: kind.clone(),
            dest: dest.clone(),
            params: TemplateParams {
                namespace: namespace.clone(),
                image: image.clone(),
                tag: tag.clone(),
                port: args.port,
            },
        })
    }

    /// Invoke the generator registered for `kind`
    ///
    /// Generator errors are returned as-is.
    #[instrument(skip(self, params))]
    pub fn dispatch(&self, kind: &str, params: &TemplateParams) -> Result<Artifact> {
        let producer = self
            .registry
            .get(kind)
            .ok_or_else(|| GenerateError::unknown_kind(kind, self.registry.kinds()))?;

        let payload = producer(params)?;
        debug!("Generator '{}' produced {} bytes", kind, payload.len());
        Ok(payload)
    }

    /// Dispatch a validated invocation and persist its payload
    #[instrument(
        skip(self, invocation),
        fields(kind = %invocation.kind, dest = %invocation.dest.display())
    )]
    pub fn run(&self, invocation: &Invocation, dry_run: bool) -> Result<GenerationReport> {
        let payload = self.dispatch(&invocation.kind, &invocation.params)?;

        let written = if dry_run {
            info!(
                "Dry run: skipping write of {} bytes to {}",
                payload.len(),
                invocation.dest.display()
            );
            false
        } else {
            self.fs_utils.persist(&invocation.dest, &payload)?;
            true
        };

        Ok(GenerationReport {
            kind: invocation.kind.clone(),
            dest: invocation.dest.clone(),
            payload_len: payload.len(),
            written,
        })
    }
}

fn required<'v, T>(option: &'static str, value: Option<&'v T>) -> Result<&'v T> {
    value.ok_or(GenerateError::missing_option(option))
}
