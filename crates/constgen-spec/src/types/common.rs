use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Output target language. The set is closed: an `outputs` key that is not
/// one of these identifiers is rejected when the document is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum Target {
    Python,
    Python2,
    Javascript,
    Vue,
    C,
    Java,
    Rust,
    R,
    Dart,
}

impl Target {
    /// Every supported target, in registry order.
    pub const ALL: [Target; 9] = [
        Target::Python,
        Target::Python2,
        Target::Javascript,
        Target::Vue,
        Target::C,
        Target::Java,
        Target::Rust,
        Target::R,
        Target::Dart,
    ];

    /// Identifier used as the key under `outputs`.
    pub fn id(self) -> &'static str {
        match self {
            Target::Python => "python",
            Target::Python2 => "python2",
            Target::Javascript => "javascript",
            Target::Vue => "vue",
            Target::C => "c",
            Target::Java => "java",
            Target::Rust => "rust",
            Target::R => "r",
            Target::Dart => "dart",
        }
    }

    /// Look up a target by its identifier.
    pub fn from_id(id: &str) -> Option<Target> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::from_id(s).ok_or_else(|| {
            let known: Vec<&str> = Target::ALL.iter().map(|t| t.id()).collect();
            format!("unknown target '{s}' (expected one of: {})", known.join(", "))
        })
    }
}

/// Kind of a value found in the input tree. Only `Integer` and `String`
/// are legal constant values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    String,
    Float,
    Boolean,
    Null,
    List,
    Mapping,
}

impl ValueKind {
    pub fn of(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ValueKind::Null,
            serde_json::Value::Bool(_) => ValueKind::Boolean,
            serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            serde_json::Value::Number(_) => ValueKind::Float,
            serde_json::Value::String(_) => ValueKind::String,
            serde_json::Value::Array(_) => ValueKind::List,
            serde_json::Value::Object(_) => ValueKind::Mapping,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::String => "string",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::List => "list",
            ValueKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether `name` is usable as an identifier in every target language.
/// Only ASCII letters, digits and underscores are accepted, and the first
/// character must not be a digit.
pub fn is_identifier(name: &str) -> bool {
    static IDENT: OnceLock<Regex> = OnceLock::new();
    IDENT
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"))
        .is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_ids_roundtrip() {
        for target in Target::ALL {
            assert_eq!(Target::from_id(target.id()), Some(target));
            assert_eq!(target.id().parse::<Target>().unwrap(), target);
        }
    }

    #[test]
    fn test_target_serde_matches_id() {
        for target in Target::ALL {
            let json = serde_json::to_value(target).unwrap();
            assert_eq!(json, serde_json::json!(target.id()));
        }
    }

    #[test]
    fn test_unknown_target() {
        assert_eq!(Target::from_id("cobol"), None);
        let err = "cobol".parse::<Target>().unwrap_err();
        assert!(err.contains("cobol"));
        assert!(err.contains("python2"));
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(ValueKind::of(&serde_json::json!(1)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&serde_json::json!(-1)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&serde_json::json!(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&serde_json::json!("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&serde_json::json!(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&serde_json::json!(null)), ValueKind::Null);
        assert_eq!(ValueKind::of(&serde_json::json!([1])), ValueKind::List);
        assert_eq!(ValueKind::of(&serde_json::json!({})), ValueKind::Mapping);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("MAX_USERS"));
        assert!(is_identifier("Color"));
        assert!(is_identifier("_private1"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("kebab-case"));
        assert!(!is_identifier("Größe"));
    }
}
