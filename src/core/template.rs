//! Template kinds and the parameters handed to generators


/// Rendered payload returned by a generator
pub type Artifact = Vec<u8>;

/// Domain parameters consumed by a generator
///
/// The dispatcher only checks presence; value validation belongs to the
/// generator that reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    /// Namespace the rendered resource is placed in
    pub namespace: String,
    /// Container image name, without tag
    pub image: String,
    /// Container image tag
    pub tag: String,
    /// Application port to expose, `0` for none
    pub port: i64,
}

impl TemplateParams {
    /// Full image reference (`image:tag`)
    pub fn image_ref(&self) -> String {
        format!("{}:{}", self.image, self.tag)
    }
}

/// Built-in template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// Pod that runs an artifact builder image
    ArtifactBuilderPod,
}

impl TemplateKind {
    /// Every built-in kind
    pub const ALL: &'static [TemplateKind] = &[TemplateKind::ArtifactBuilderPod];

    /// The command-line name of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArtifactBuilderPod => "artifact_builder_pod",
        }
    }
}
