//! JSON Schema for the definition document, for editor completion and
//! external validation. The shapes here mirror what [`crate::parser`]
//! accepts; they are not used for parsing itself.

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Top-level definition document.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "constgen definition")]
pub struct DocumentShape {
    /// Comment written at the top of every generated file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_comment: Option<String>,
    #[serde(default)]
    pub constants: Vec<ConstantShape>,
    #[serde(default)]
    pub enums: Vec<EnumShape>,
    /// Files to generate, keyed by target language.
    pub outputs: OutputsShape,
}

/// One optional entry per supported target. Unknown targets are rejected.
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct OutputsShape {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python2: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub javascript: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vue: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<OutputShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dart: Option<OutputShape>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ConstantShape {
    pub name: String,
    pub value: ValueShape,
}

/// Constants are integers or strings; nothing else.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ValueShape {
    Integer(i64),
    String(String),
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EnumShape {
    pub name: String,
    /// Member labels. A member's tag is its position in this list.
    #[schemars(length(min = 1))]
    pub values: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputShape {
    /// Destination file, created along with missing parent directories.
    pub path: String,
    /// Overrides the document-wide `common_comment` for this target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_comment: Option<String>,
}

/// Generate the JSON Schema of the definition document.
pub fn generate_document_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(DocumentShape)).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::Target;

    #[test]
    fn generated_schema_is_valid_json_schema() {
        let schema = generate_document_schema();
        assert!(schema.is_object());
        assert!(schema.get("$schema").is_some());
        let properties = schema.get("properties").unwrap();
        for key in ["common_comment", "constants", "enums", "outputs"] {
            assert!(properties.get(key).is_some(), "missing property {key}");
        }
    }

    #[test]
    fn schema_requires_outputs_only() {
        let schema = generate_document_schema();
        let required = schema.get("required").unwrap().as_array().unwrap();
        assert_eq!(required, &vec![serde_json::json!("outputs")]);
    }

    #[test]
    fn schema_lists_target_identifiers() {
        let text = generate_document_schema().to_string();
        for target in Target::ALL {
            assert!(text.contains(&format!("\"{}\"", target.id())));
        }
    }

    #[test]
    fn shape_accepts_a_valid_document() {
        let shape: DocumentShape = serde_json::from_value(serde_json::json!({
            "constants": [{ "name": "A", "value": 1 }, { "name": "B", "value": "b" }],
            "enums": [{ "name": "Color", "values": ["RED"] }],
            "outputs": { "python": { "path": "a.py" } }
        }))
        .unwrap();
        assert_eq!(shape.constants.len(), 2);
        assert!(matches!(shape.constants[1].value, ValueShape::String(_)));
        assert!(shape.outputs.python.is_some());
    }

    #[test]
    fn shape_rejects_unknown_target() {
        let result: Result<DocumentShape, _> = serde_json::from_value(serde_json::json!({
            "outputs": { "cobol": { "path": "a.cob" } }
        }));
        assert!(result.is_err());
    }
}
