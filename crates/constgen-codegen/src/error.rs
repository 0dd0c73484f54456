use std::path::PathBuf;

use constgen_spec::{Target, ValueKind};
use thiserror::Error;

/// Failure while a renderer writes to its sink.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("constant `{name}` has unsupported value type {kind} (expected integer or string)")]
    UnsupportedValueType { name: String, kind: ValueKind },

    #[error("failed to write to {sink}: {source}")]
    Sink {
        sink: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure generating one target.
#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("target `{0}` is not configured in the document")]
    NotConfigured(Target),

    #[error("{target}: cannot create directory {path}: {source}")]
    CreateDir {
        target: Target,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{target}: cannot open {path}: {source}")]
    Open {
        target: Target,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{target}: {source}")]
    Render {
        target: Target,
        #[source]
        source: RenderError,
    },
}

impl CodegenError {
    /// Target the failure belongs to.
    pub fn target(&self) -> Target {
        match self {
            CodegenError::NotConfigured(target)
            | CodegenError::CreateDir { target, .. }
            | CodegenError::Open { target, .. }
            | CodegenError::Render { target, .. } => *target,
        }
    }
}
