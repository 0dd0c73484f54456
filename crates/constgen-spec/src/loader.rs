use std::path::Path;

use crate::parser::{self, InputFormat};
use crate::types::document::Document;
use crate::types::error::DefinitionError;

/// Read, parse and validate a definition file.
///
/// `.json` files are parsed as JSON, everything else as YAML.
pub fn load_document(path: &Path) -> Result<Document, LoadError> {
    if !path.is_file() {
        return Err(LoadError::NotFound(path.to_string_lossy().into_owned()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LoadError::Io(path.to_string_lossy().into_owned(), e))?;

    let format = InputFormat::from_path(path);
    log::debug!("loading {} as {:?}", path.display(), format);
    load_str(&content, format, &path.to_string_lossy())
}

/// Parse and validate a definition held in memory. `file` is only used in
/// error messages.
pub fn load_str(content: &str, format: InputFormat, file: &str) -> Result<Document, LoadError> {
    let tree = parser::parse_tree(content, format).map_err(|message| LoadError::Parse {
        file: file.to_string(),
        message,
    })?;

    let document = parser::parse_document(&tree).map_err(|source| LoadError::Definition {
        file: file.to_string(),
        source,
    })?;

    log::debug!(
        "loaded {}: {} constant(s), {} enum(s), {} output(s)",
        file,
        document.constants().len(),
        document.enums().len(),
        document.outputs().len()
    );
    Ok(document)
}

/// Errors that prevent a document from being loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Definition file not found: {0}")]
    NotFound(String),

    #[error("IO error reading {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse {file}: {message}")]
    Parse { file: String, message: String },

    #[error("Invalid definition in {file}: {source}")]
    Definition {
        file: String,
        #[source]
        source: DefinitionError,
    },
}

impl LoadError {
    /// The definition error, if the file parsed but was structurally invalid.
    pub fn definition(&self) -> Option<&DefinitionError> {
        match self {
            LoadError::Definition { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::common::Target;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("/nonexistent/constants.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_load_yaml_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("constants.yaml");
        std::fs::write(
            &path,
            "constants:\n  - name: A\n    value: 1\noutputs:\n  rust:\n    path: gen/a.rs\n",
        )
        .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.constants().len(), 1);
        assert!(doc.output(Target::Rust).is_some());
    }

    #[test]
    fn test_load_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("constants.json");
        std::fs::write(
            &path,
            r#"{ "enums": [{ "name": "Color", "values": ["RED"] }], "outputs": { "c": { "path": "a.h" } } }"#,
        )
        .unwrap();

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.enums()[0].name(), "Color");
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = load_str("{ nope", InputFormat::Json, "broken.json").unwrap_err();
        match err {
            LoadError::Parse { file, .. } => assert_eq!(file, "broken.json"),
            e => panic!("Expected Parse, got: {:?}", e),
        }
    }

    #[test]
    fn test_definition_error_is_exposed() {
        let err = load_str(
            "enums:\n  - name: Empty\n    values: []\noutputs: {}\n",
            InputFormat::Yaml,
            "defs.yaml",
        )
        .unwrap_err();
        assert!(matches!(
            err.definition(),
            Some(DefinitionError::EmptyEnum { .. })
        ));
        assert!(err.to_string().contains("defs.yaml"));
    }
}
