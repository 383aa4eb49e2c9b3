//! Error types for template generation
//!
//! Provides structured error handling with context and proper error chains.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the generator pipeline
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No template kind was given on the command line
    #[error("Kind of template not provided")]
    MissingKind,

    /// More than one positional argument was given
    #[error("Too many args: expected one template kind, got {}: {}", .args.len(), .args.join(", "))]
    TooManyArgs { args: Vec<String> },

    /// The template kind is not in the registry
    #[error("Wrong type of template provided: '{kind}' (valid kinds: {})", .known.join(", "))]
    UnknownKind { kind: String, known: Vec<String> },

    /// A required named option is absent
    #[error("Required option '--{option}' not provided")]
    MissingOption { option: &'static str },

    /// Two generators were registered under the same kind
    #[error("Template kind '{kind}' is already registered")]
    DuplicateKind { kind: String },

    /// Errors raised by a generator while rendering its template
    #[error("Template error ({kind}): {message}")]
    Template {
        kind: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failure to create or write the destination file
    #[error("Write error: failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GenerateError {
    /// Create a new too-many-args error
    pub fn too_many_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::TooManyArgs {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a new unknown-kind error listing the valid kinds
    pub fn unknown_kind(kind: impl Into<String>, known: Vec<String>) -> Self {
        Self::UnknownKind {
            kind: kind.into(),
            known,
        }
    }

    /// Create a new missing-option error
    pub const fn missing_option(option: &'static str) -> Self {
        Self::MissingOption { option }
    }

    /// Create a new template error
    pub fn template(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            kind: kind.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a new template error caused by another error
    pub fn template_with_source<E>(
        kind: impl Into<String>,
        message: impl Into<String>,
        source: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Template {
            kind: kind.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new write error
    pub fn write<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error caused by another error
    pub fn config_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GenerateError>;
