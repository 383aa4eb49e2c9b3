//! Registry of template generators
//!
//! Maps a kind string to the function that renders it. The table is built
//! once at startup and only read afterwards.

use crate::{
    core::{
        pod,
        template::{Artifact, TemplateKind, TemplateParams},
    },
    error::{GenerateError, Result},
};
use std::collections::BTreeMap;
use tracing::debug;

/// A generator: renders a template from its parameters
pub type Producer = fn(&TemplateParams) -> Result<Artifact>;

/// Immutable mapping of template kind to generator
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: BTreeMap<String, Producer>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in template kinds
    pub fn builtin() -> Self {
        let entries = TemplateKind::ALL
            .iter()
            .map(|kind| (kind.as_str().to_string(), producer_for(*kind)))
            .collect();

        Self { entries }
    }

    /// Add a generator under `kind`, rejecting duplicates
    pub fn register(mut self, kind: impl Into<String>, producer: Producer) -> Result<Self> {
        let kind = kind.into();
        if self.entries.contains_key(&kind) {
            return Err(GenerateError::DuplicateKind { kind });
        }

        debug!("Registering template kind: {}", kind);
        self.entries.insert(kind, producer);
        Ok(self)
    }

    /// Look up the generator for `kind`
    pub fn get(&self, kind: &str) -> Option<Producer> {
        self.entries.get(kind).copied()
    }

    /// Whether `kind` is registered
    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    /// All registered kinds, sorted
    pub fn kinds(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    /// Number of registered kinds
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn producer_for(kind: TemplateKind) -> Producer {
    match kind {
        TemplateKind::ArtifactBuilderPod => pod::render_artifact_builder_pod,
    }
}
