//! Error types for resource decoding, encoding, loading and validation.

use std::path::PathBuf;
use thiserror::Error;

use crate::types::{Context, ResourceKind};

/// Errors raised by the tagged codec and the link resolver.
///
/// Every variant is fatal to the call that produced it: no partial
/// sequence is ever returned alongside an error.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("element {index} in {context}: missing or non-string \"type\" discriminator")]
    MissingDiscriminator { context: Context, index: usize },

    #[error("element {index} in {context}: unknown variant \"{tag}\", expected one of {}", expected.join(", "))]
    UnknownVariant {
        tag: String,
        context: Context,
        index: usize,
        expected: Vec<&'static str>,
    },

    #[error("{context}: expected an array of objects, found {found}")]
    ExpectedArrayOfObjects {
        context: Context,
        /// `None` when the top-level value is not an array.
        index: Option<usize>,
        found: String,
    },

    #[error("{kind} is not a legal variant in {context}")]
    VariantNotInContext { kind: ResourceKind, context: Context },

    #[error("link object has neither \"self\" nor \"related\"")]
    UnknownLinkShape,

    #[error("link object has both \"self\" and \"related\"")]
    AmbiguousLinkShape,

    #[error("{context}: expected a single link object, got {actual}")]
    ExpectedSingleLink { context: Context, actual: String },

    #[error("element {index} in {context}: invalid {kind} payload: {source}")]
    InvalidPayload {
        context: Context,
        index: usize,
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },
}

impl CodecError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        2
    }

    /// The unknown discriminator, when this is an `UnknownVariant` error.
    pub fn unknown_tag(&self) -> Option<&str> {
        match self {
            CodecError::UnknownVariant { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

/// Errors while reading a JSON document.
#[derive(Debug, Error)]
pub enum LoadError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parse errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LoadError::FileNotFound { .. } | LoadError::ReadError { .. } => 3,
            LoadError::InvalidJson { .. } => 2,
        }
    }
}

/// Errors during wire-shape validation.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid wire schema: {message}")]
    InvalidSchema { message: String },

    #[error("validation failed with {} error(s)", errors.len())]
    Invalid { errors: Vec<SchemaError> },
}

impl ValidateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidateError::Load(e) => e.exit_code(),
            ValidateError::InvalidSchema { .. } => 2,
            ValidateError::Invalid { .. } => 1,
        }
    }
}

/// Single validation error with path context.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SchemaError {
    /// JSON Pointer (RFC 6901) to the offending value.
    pub path: String,
    /// Human-readable error message.
    pub message: String,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}
