use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::common::{is_identifier, Target};
use super::constant::Constant;
use super::enumeration::Enumeration;
use super::error::DefinitionError;

/// Per-target output configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    path: PathBuf,
    comment: Option<String>,
}

impl OutputConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            comment: None,
        }
    }

    /// Set a comment that overrides the document's `common_comment`.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Header comment for this target. Once the config is part of a
    /// [`Document`], this already falls back to the document-wide comment.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Destination when relative paths resolve against `base`. Absolute
    /// paths are kept.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }
}

/// A fully validated definition document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    common_comment: Option<String>,
    constants: Vec<Constant>,
    enums: Vec<Enumeration>,
    outputs: IndexMap<Target, OutputConfig>,
}

impl Document {
    /// Validate and assemble a document.
    ///
    /// Fails on invalid or duplicate names, empty enumerations and repeated
    /// enum values. Outputs without their own comment inherit
    /// `common_comment`.
    pub fn new(
        common_comment: Option<String>,
        constants: Vec<Constant>,
        enums: Vec<Enumeration>,
        outputs: IndexMap<Target, OutputConfig>,
    ) -> Result<Self, DefinitionError> {
        let mut seen = HashSet::new();
        for (i, constant) in constants.iter().enumerate() {
            let path = format!("$.constants[{i}].name");
            check_identifier(constant.name(), &path)?;
            if !seen.insert(constant.name()) {
                return Err(DefinitionError::DuplicateName {
                    path,
                    kind: "constant",
                    name: constant.name().to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for (i, enumeration) in enums.iter().enumerate() {
            let path = format!("$.enums[{i}]");
            check_identifier(enumeration.name(), &format!("{path}.name"))?;
            if !seen.insert(enumeration.name()) {
                return Err(DefinitionError::DuplicateName {
                    path: format!("{path}.name"),
                    kind: "enum",
                    name: enumeration.name().to_string(),
                });
            }
            if enumeration.values().is_empty() {
                return Err(DefinitionError::EmptyEnum {
                    path: format!("{path}.values"),
                    name: enumeration.name().to_string(),
                });
            }
            let mut values = HashSet::new();
            for (j, value) in enumeration.values().iter().enumerate() {
                let value_path = format!("{path}.values[{j}]");
                check_identifier(value, &value_path)?;
                if !values.insert(value.as_str()) {
                    return Err(DefinitionError::DuplicateEnumValue {
                        path: value_path,
                        name: enumeration.name().to_string(),
                        value: value.clone(),
                    });
                }
            }
        }

        let outputs = outputs
            .into_iter()
            .map(|(target, mut output)| {
                if output.comment.is_none() {
                    output.comment = common_comment.clone();
                }
                (target, output)
            })
            .collect();

        Ok(Self {
            common_comment,
            constants,
            enums,
            outputs,
        })
    }

    pub fn common_comment(&self) -> Option<&str> {
        self.common_comment.as_deref()
    }

    pub fn constants(&self) -> &[Constant] {
        &self.constants
    }

    pub fn enums(&self) -> &[Enumeration] {
        &self.enums
    }

    /// Configured targets in declaration order.
    pub fn outputs(&self) -> &IndexMap<Target, OutputConfig> {
        &self.outputs
    }

    pub fn output(&self, target: Target) -> Option<&OutputConfig> {
        self.outputs.get(&target)
    }
}

fn check_identifier(name: &str, path: &str) -> Result<(), DefinitionError> {
    if name.is_empty() {
        return Err(DefinitionError::MissingField {
            path: path.to_string(),
        });
    }
    if !is_identifier(name) {
        return Err(DefinitionError::InvalidIdentifier {
            path: path.to_string(),
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn outputs(targets: &[(Target, OutputConfig)]) -> IndexMap<Target, OutputConfig> {
        targets.iter().cloned().collect()
    }

    #[test]
    fn test_common_comment_is_inherited() {
        let doc = Document::new(
            Some("Shared constants".to_string()),
            vec![],
            vec![],
            outputs(&[
                (Target::Python, OutputConfig::new("out/c.py")),
                (
                    Target::C,
                    OutputConfig::new("out/c.h").with_comment("C only"),
                ),
            ]),
        )
        .unwrap();

        assert_eq!(
            doc.output(Target::Python).unwrap().comment(),
            Some("Shared constants")
        );
        assert_eq!(doc.output(Target::C).unwrap().comment(), Some("C only"));
    }

    #[test]
    fn test_duplicate_constant_name() {
        let err = Document::new(
            None,
            vec![Constant::new("A", 1), Constant::new("A", 2)],
            vec![],
            IndexMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::DuplicateName {
                path: "$.constants[1].name".to_string(),
                kind: "constant",
                name: "A".to_string(),
            }
        );
    }

    #[test]
    fn test_constant_and_enum_may_share_a_name() {
        let doc = Document::new(
            None,
            vec![Constant::new("Color", 1)],
            vec![Enumeration::new("Color", ["RED"])],
            IndexMap::new(),
        );
        assert!(doc.is_ok());
    }

    #[test]
    fn test_duplicate_enum_name() {
        let err = Document::new(
            None,
            vec![],
            vec![
                Enumeration::new("Color", ["RED"]),
                Enumeration::new("Color", ["BLUE"]),
            ],
            IndexMap::new(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "$.enums[1].name");
    }

    #[test]
    fn test_empty_enum() {
        let err = Document::new(
            None,
            vec![],
            vec![Enumeration::new("Color", Vec::<String>::new())],
            IndexMap::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::EmptyEnum {
                path: "$.enums[0].values".to_string(),
                name: "Color".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_enum_value() {
        let err = Document::new(
            None,
            vec![],
            vec![Enumeration::new("Color", ["RED", "RED"])],
            IndexMap::new(),
        )
        .unwrap_err();
        assert_eq!(err.path(), "$.enums[0].values[1]");
    }

    #[test]
    fn test_non_ascii_name_rejected() {
        let err = Document::new(
            None,
            vec![Constant::new("GRÖSSE", 1)],
            vec![],
            IndexMap::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_empty_name_is_missing() {
        let err = Document::new(None, vec![Constant::new("", 1)], vec![], IndexMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::MissingField {
                path: "$.constants[0].name".to_string()
            }
        );
    }

    #[test]
    fn test_resolve() {
        let out = OutputConfig::new("gen/c.h");
        assert_eq!(out.resolve(Path::new("/tmp/proj")), Path::new("/tmp/proj/gen/c.h"));
        assert_eq!(out.path(), Path::new("gen/c.h"));

        let absolute = OutputConfig::new("/abs/c.h");
        assert_eq!(absolute.resolve(Path::new("/tmp/proj")), Path::new("/abs/c.h"));
    }
}
