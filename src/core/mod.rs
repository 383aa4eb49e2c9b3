//! Core functionality for template generation
//!
//! Contains the generator registry, the dispatcher that validates and routes
//! invocations, and the built-in templates.

pub mod dispatcher;
pub mod pod;
pub mod registry;
pub mod template;

pub use dispatcher::{Dispatcher, GenerationReport, Invocation};
pub use registry::{Producer, Registry};
pub use template::{Artifact, TemplateKind, TemplateParams};
