//! Kubernetes pod manifest rendering
//!
//! Builds the manifest from typed structs and serializes it with serde_json,
//! so the output is always well-formed JSON.

use crate::{
    core::template::{Artifact, TemplateKind, TemplateParams},
    error::{GenerateError, Result},
};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, instrument};

const POD_NAME: &str = "artifact-builder";
const MAX_NAMESPACE_LEN: usize = 63;
const MAX_PORT: i64 = 65_535;

static NAMESPACE_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$"));
static TAG_RE: LazyLock<std::result::Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$"));

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Pod {
    api_version: &'static str,
    kind: &'static str,
    metadata: ObjectMeta,
    spec: PodSpec,
}

#[derive(Debug, Serialize)]
struct ObjectMeta {
    name: String,
    namespace: String,
    labels: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PodSpec {
    containers: Vec<Container>,
    restart_policy: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Container {
    name: String,
    image: String,
    image_pull_policy: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ports: Vec<ContainerPort>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContainerPort {
    container_port: u16,
    protocol: &'static str,
}

/// Render the `artifact_builder_pod` template
#[instrument(skip(params), fields(namespace = %params.namespace, image = %params.image_ref()))]
pub fn render_artifact_builder_pod(params: &TemplateParams) -> Result<Artifact> {
    let kind = TemplateKind::ArtifactBuilderPod;

    validate_namespace(kind, &params.namespace)?;
    validate_image(kind, &params.image)?;
    validate_tag(kind, &params.tag)?;
    let port = validate_port(kind, params.port)?;

    let labels = BTreeMap::from([("app".to_string(), POD_NAME.to_string())]);
    let ports = port
        .map(|container_port| ContainerPort {
            container_port,
            protocol: "TCP",
        })
        .into_iter()
        .collect();

    let pod = Pod {
        api_version: "v1",
        kind: "Pod",
        metadata: ObjectMeta {
            name: POD_NAME.to_string(),
            namespace: params.namespace.clone(),
            labels,
        },
        spec: PodSpec {
            containers: vec![Container {
                name: POD_NAME.to_string(),
                image: params.image_ref(),
                image_pull_policy: "IfNotPresent",
                ports,
            }],
            restart_policy: "Never",
        },
    };

    let mut payload = serde_json::to_vec_pretty(&pod).map_err(|e| {
        GenerateError::template_with_source(kind.as_str(), "Failed to serialize pod manifest", e)
    })?;
    payload.push(b'\n');

    debug!("Rendered pod manifest ({} bytes)", payload.len());
    Ok(payload)
}

fn pattern(
    kind: TemplateKind,
    compiled: &'static std::result::Result<Regex, regex::Error>,
) -> Result<&'static Regex> {
    compiled.as_ref().map_err(|e| {
        GenerateError::template_with_source(kind.as_str(), "Failed to compile regex", e.clone())
    })
}

/// Namespaces must be DNS-1123 labels
fn validate_namespace(kind: TemplateKind, namespace: &str) -> Result<()> {
    let re = pattern(kind, &NAMESPACE_RE)?;

    if namespace.len() > MAX_NAMESPACE_LEN || !re.is_match(namespace) {
        return Err(GenerateError::template(
            kind.as_str(),
            format!(
                "Invalid namespace '{namespace}': must be a DNS-1123 label \
                 of at most {MAX_NAMESPACE_LEN} characters"
            ),
        ));
    }
    Ok(())
}

fn validate_image(kind: TemplateKind, image: &str) -> Result<()> {
    if image.is_empty() {
        return Err(GenerateError::template(kind.as_str(), "Image name is empty"));
    }
    if image.chars().any(char::is_whitespace) {
        return Err(GenerateError::template(
            kind.as_str(),
            format!("Invalid image '{image}': contains whitespace"),
        ));
    }

    // A ':' after the last '/' is a tag; a ':' before it is a registry port.
    let last_segment = image.rsplit('/').next().unwrap_or(image);
    if last_segment.is_empty() || last_segment.contains(':') || image.contains('@') {
        return Err(GenerateError::template(
            kind.as_str(),
            format!("Invalid image '{image}': pass the tag with --tag"),
        ));
    }
    Ok(())
}

fn validate_tag(kind: TemplateKind, tag: &str) -> Result<()> {
    let re = pattern(kind, &TAG_RE)?;

    if !re.is_match(tag) {
        return Err(GenerateError::template(
            kind.as_str(),
            format!("Invalid image tag '{tag}'"),
        ));
    }
    Ok(())
}

/// Returns the port to expose, or `None` when `port` is zero
fn validate_port(kind: TemplateKind, port: i64) -> Result<Option<u16>> {
    if port == 0 {
        return Ok(None);
    }
    if !(1..=MAX_PORT).contains(&port) {
        return Err(GenerateError::template(
            kind.as_str(),
            format!("Invalid port {port}: must be between 0 and {MAX_PORT}"),
        ));
    }
    u16::try_from(port).map(Some).map_err(|e| {
        GenerateError::template_with_source(kind.as_str(), format!("Invalid port {port}"), e)
    })
}
