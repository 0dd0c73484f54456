use thiserror::Error;

use super::common::ValueKind;

/// A structural problem in the definition document.
///
/// Every variant carries the path of the offending field, written as a
/// JSONPath-like string such as `$.constants[2].value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("`{path}` must be {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: ValueKind,
    },

    #[error("duplicate {kind} name `{name}` at `{path}`")]
    DuplicateName {
        path: String,
        kind: &'static str,
        name: String,
    },

    #[error("enum `{name}` at `{path}` must have at least one value")]
    EmptyEnum { path: String, name: String },

    #[error("enum `{name}` declares value `{value}` more than once (`{path}`)")]
    DuplicateEnumValue {
        path: String,
        name: String,
        value: String,
    },

    #[error("`{name}` at `{path}` is not a valid identifier (expected ASCII letters, digits and underscores, not starting with a digit)")]
    InvalidIdentifier { path: String, name: String },

    #[error("constant `{name}` at `{path}` has unsupported value type {kind} (expected integer or string)")]
    UnsupportedValueType {
        path: String,
        name: String,
        kind: ValueKind,
    },

    #[error("integer constant `{name}` at `{path}` does not fit in a signed 64-bit integer")]
    IntegerOutOfRange { path: String, name: String },

    #[error("unknown output target `{target}` at `{path}`")]
    UnknownTarget { path: String, target: String },
}

impl DefinitionError {
    /// Path of the offending field.
    pub fn path(&self) -> &str {
        match self {
            DefinitionError::MissingField { path }
            | DefinitionError::InvalidType { path, .. }
            | DefinitionError::DuplicateName { path, .. }
            | DefinitionError::EmptyEnum { path, .. }
            | DefinitionError::DuplicateEnumValue { path, .. }
            | DefinitionError::InvalidIdentifier { path, .. }
            | DefinitionError::UnsupportedValueType { path, .. }
            | DefinitionError::IntegerOutOfRange { path, .. }
            | DefinitionError::UnknownTarget { path, .. } => path,
        }
    }
}
