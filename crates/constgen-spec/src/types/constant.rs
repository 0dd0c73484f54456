use std::fmt;

use super::common::ValueKind;
use super::error::DefinitionError;

/// Value of a constant.
///
/// Marked `#[non_exhaustive]` so consumers outside this crate keep a fallback
/// arm for value kinds they do not know how to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstValue {
    Integer(i64),
    String(String),
}

impl ConstValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConstValue::Integer(_) => ValueKind::Integer,
            ConstValue::String(_) => ValueKind::String,
        }
    }
}

impl From<i64> for ConstValue {
    fn from(value: i64) -> Self {
        ConstValue::Integer(value)
    }
}

impl From<i32> for ConstValue {
    fn from(value: i32) -> Self {
        ConstValue::Integer(i64::from(value))
    }
}

impl From<&str> for ConstValue {
    fn from(value: &str) -> Self {
        ConstValue::String(value.to_string())
    }
}

impl From<String> for ConstValue {
    fn from(value: String) -> Self {
        ConstValue::String(value)
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstValue::Integer(i) => write!(f, "{i}"),
            ConstValue::String(s) => write!(f, "{s:?}"),
        }
    }
}

/// A named constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    name: String,
    value: ConstValue,
}

impl Constant {
    pub fn new(name: impl Into<String>, value: impl Into<ConstValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Build a constant from an untyped tree value.
    ///
    /// `path` locates the value in the source document and is reported back
    /// when the value is neither an integer nor a string.
    pub fn from_json(
        name: impl Into<String>,
        value: &serde_json::Value,
        path: &str,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let value = match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => ConstValue::Integer(i),
                None if n.is_u64() => {
                    return Err(DefinitionError::IntegerOutOfRange {
                        path: path.to_string(),
                        name,
                    });
                }
                None => {
                    return Err(DefinitionError::UnsupportedValueType {
                        path: path.to_string(),
                        name,
                        kind: ValueKind::Float,
                    });
                }
            },
            serde_json::Value::String(s) => ConstValue::String(s.clone()),
            other => {
                return Err(DefinitionError::UnsupportedValueType {
                    path: path.to_string(),
                    name,
                    kind: ValueKind::of(other),
                });
            }
        };
        Ok(Self { name, value })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ConstValue {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_json_integer_and_string() {
        let c = Constant::from_json("MAX_USERS", &serde_json::json!(100), "$.value").unwrap();
        assert_eq!(c.value(), &ConstValue::Integer(100));

        let c = Constant::from_json("GREETING", &serde_json::json!("hi"), "$.value").unwrap();
        assert_eq!(c.value(), &ConstValue::String("hi".to_string()));
    }

    #[test]
    fn test_from_json_rejects_float() {
        let err = Constant::from_json("PI", &serde_json::json!(2.5), "$.constants[0].value")
            .unwrap_err();
        assert_eq!(
            err,
            DefinitionError::UnsupportedValueType {
                path: "$.constants[0].value".to_string(),
                name: "PI".to_string(),
                kind: ValueKind::Float,
            }
        );
    }

    #[test]
    fn test_from_json_rejects_bool_and_list() {
        for value in [serde_json::json!(true), serde_json::json!([1, 2])] {
            let err = Constant::from_json("X", &value, "$.value").unwrap_err();
            assert!(matches!(err, DefinitionError::UnsupportedValueType { .. }));
        }
    }

    #[test]
    fn test_from_json_rejects_u64_overflow() {
        let err = Constant::from_json("BIG", &serde_json::json!(u64::MAX), "$.value").unwrap_err();
        assert!(matches!(err, DefinitionError::IntegerOutOfRange { .. }));
    }

    #[test]
    fn test_extreme_i64_values() {
        let c = Constant::from_json("MIN", &serde_json::json!(i64::MIN), "$.value").unwrap();
        assert_eq!(c.value(), &ConstValue::Integer(i64::MIN));
    }
}
