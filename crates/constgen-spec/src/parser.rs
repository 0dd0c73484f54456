use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::types::common::{Target, ValueKind};
use crate::types::constant::Constant;
use crate::types::document::{Document, OutputConfig};
use crate::types::enumeration::Enumeration;
use crate::types::error::DefinitionError;

const TOP_LEVEL_KEYS: [&str; 4] = ["common_comment", "constants", "enums", "outputs"];

/// Input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    /// Detect the format from a file name. Anything that is not `.json` is
    /// read as YAML, which is also a superset of JSON.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Yaml,
        }
    }
}

/// Parse file contents into a generic tree.
pub fn parse_tree(content: &str, format: InputFormat) -> Result<Value, String> {
    match format {
        InputFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        InputFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
    }
}

/// Build a validated [`Document`] from a generic key/value tree.
pub fn parse_document(tree: &Value) -> Result<Document, DefinitionError> {
    let root = as_object(tree, "$")?;

    for key in root.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            log::warn!("ignoring unknown top-level key `{key}`");
        }
    }

    let common_comment = optional_str(root, "common_comment", "$")?;

    let mut constants = Vec::new();
    if let Some(list) = optional_array(root, "constants", "$")? {
        for (i, item) in list.iter().enumerate() {
            let path = format!("$.constants[{i}]");
            let obj = as_object(item, &path)?;
            let name = required_str(obj, "name", &path)?;
            let value = obj.get("value").ok_or_else(|| DefinitionError::MissingField {
                path: format!("{path}.value"),
            })?;
            constants.push(Constant::from_json(name, value, &format!("{path}.value"))?);
        }
    }

    let mut enums = Vec::new();
    if let Some(list) = optional_array(root, "enums", "$")? {
        for (i, item) in list.iter().enumerate() {
            let path = format!("$.enums[{i}]");
            let obj = as_object(item, &path)?;
            let name = required_str(obj, "name", &path)?;
            let values_path = format!("{path}.values");
            let raw_values = obj
                .get("values")
                .ok_or_else(|| DefinitionError::MissingField {
                    path: values_path.clone(),
                })?;
            let raw_values = as_array(raw_values, &values_path)?;
            let values = raw_values
                .iter()
                .enumerate()
                .map(|(j, v)| as_str(v, &format!("{values_path}[{j}]")).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;
            enums.push(Enumeration::new(name, values));
        }
    }

    let raw_outputs = root.get("outputs").ok_or_else(|| DefinitionError::MissingField {
        path: "$.outputs".to_string(),
    })?;
    let raw_outputs = as_object(raw_outputs, "$.outputs")?;
    let mut outputs = IndexMap::new();
    for (key, item) in raw_outputs {
        let path = format!("$.outputs.{key}");
        let target = Target::from_id(key).ok_or_else(|| DefinitionError::UnknownTarget {
            path: path.clone(),
            target: key.clone(),
        })?;
        let obj = as_object(item, &path)?;
        let mut output = OutputConfig::new(required_str(obj, "path", &path)?);
        if let Some(comment) = optional_str(obj, "common_comment", &path)? {
            output = output.with_comment(comment);
        }
        outputs.insert(target, output);
    }

    Document::new(common_comment, constants, enums, outputs)
}

fn as_object<'v>(value: &'v Value, path: &str) -> Result<&'v Map<String, Value>, DefinitionError> {
    value.as_object().ok_or_else(|| DefinitionError::InvalidType {
        path: path.to_string(),
        expected: "a mapping",
        found: ValueKind::of(value),
    })
}

fn as_array<'v>(value: &'v Value, path: &str) -> Result<&'v Vec<Value>, DefinitionError> {
    value.as_array().ok_or_else(|| DefinitionError::InvalidType {
        path: path.to_string(),
        expected: "a list",
        found: ValueKind::of(value),
    })
}

fn as_str<'v>(value: &'v Value, path: &str) -> Result<&'v str, DefinitionError> {
    value.as_str().ok_or_else(|| DefinitionError::InvalidType {
        path: path.to_string(),
        expected: "a string",
        found: ValueKind::of(value),
    })
}

fn required_str<'v>(
    obj: &'v Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<&'v str, DefinitionError> {
    let path = format!("{parent}.{key}");
    match obj.get(key) {
        Some(value) => as_str(value, &path),
        None => Err(DefinitionError::MissingField { path }),
    }
}

/// A missing key and an explicit `null` both count as absent.
fn optional_str(
    obj: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<String>, DefinitionError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_str(value, &format!("{parent}.{key}")).map(|s| Some(s.to_string())),
    }
}

fn optional_array<'v>(
    obj: &'v Map<String, Value>,
    key: &str,
    parent: &str,
) -> Result<Option<&'v Vec<Value>>, DefinitionError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_array(value, &format!("{parent}.{key}")).map(Some),
    }
}
