//! Identifier casing used by the renderers.
//!
//! Names are validated as ASCII identifiers when the document is loaded,
//! so these transforms only ever see `[A-Za-z0-9_]`.

use std::sync::OnceLock;

use regex::Regex;

/// How a renderer spells the names it was given.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a constant name
    pub constant: fn(&str) -> String,
    /// Transform an enum member label
    pub enum_value: fn(&str) -> String,
}

impl NamingConvention {
    pub fn constant_name(&self, name: &str) -> String {
        (self.constant)(name)
    }

    pub fn enum_value_name(&self, name: &str) -> String {
        (self.enum_value)(name)
    }
}

/// Constants in `LOUD_SNAKE_CASE`, enum members as declared.
pub const LOUD_SNAKE: NamingConvention = NamingConvention {
    constant: loud_snake_case,
    enum_value: verbatim,
};

/// Constants in `lowerCamelCase`, enum members lower-cased.
pub const LOWER_CAMEL: NamingConvention = NamingConvention {
    constant: lower_camel_case,
    enum_value: lower_case,
};

pub fn verbatim(name: &str) -> String {
    name.to_string()
}

pub fn lower_case(name: &str) -> String {
    name.to_lowercase()
}

/// Underscore-separated, lower-cased words
/// (e.g., "HTTPServer" → "http_server", "maxUsers" → "max_users").
pub fn snake_case(name: &str) -> String {
    static ACRONYM: OnceLock<Regex> = OnceLock::new();
    static WORD: OnceLock<Regex> = OnceLock::new();
    let acronym = ACRONYM
        .get_or_init(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("acronym regex is valid"));
    let word = WORD.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").expect("word regex is valid"));

    let split = acronym.replace_all(name, "${1}_${2}");
    let split = word.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase()
}

/// Snake case, upper-cased (e.g., "maxUsers" → "MAX_USERS").
pub fn loud_snake_case(name: &str) -> String {
    snake_case(name).to_uppercase()
}

/// Lower-case the name, then capitalise every character following an
/// underscore and drop that underscore (e.g., "MAX_USERS" → "maxUsers").
/// A leading underscore is kept.
pub fn lower_camel_case(name: &str) -> String {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    let boundary =
        BOUNDARY.get_or_init(|| Regex::new(r"(?:^|_)(.)").expect("boundary regex is valid"));

    let lowered = name.to_lowercase();
    let camel = boundary.replace_all(&lowered, |caps: &regex::Captures<'_>| caps[1].to_uppercase());
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("Color"), "color");
        assert_eq!(snake_case("HttpStatus"), "http_status");
        assert_eq!(snake_case("maxUsers"), "max_users");
        assert_eq!(snake_case("HTTPServer"), "http_server");
        assert_eq!(snake_case("Version2Format"), "version2_format");
        assert_eq!(snake_case("kebab-name"), "kebab_name");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_loud_snake_case() {
        assert_eq!(loud_snake_case("MAX_USERS"), "MAX_USERS");
        assert_eq!(loud_snake_case("maxUsers"), "MAX_USERS");
        assert_eq!(loud_snake_case("DefaultTimeout"), "DEFAULT_TIMEOUT");
        assert_eq!(loud_snake_case("Color"), "COLOR");
    }

    #[test]
    fn test_loud_snake_case_is_idempotent() {
        for name in ["maxUsers", "HTTPServer", "a_b_c", "Color"] {
            let once = loud_snake_case(name);
            assert_eq!(loud_snake_case(&once), once);
        }
    }

    #[test]
    fn test_lower_camel_case() {
        assert_eq!(lower_camel_case("MAX_USERS"), "maxUsers");
        assert_eq!(lower_camel_case("max_users"), "maxUsers");
        assert_eq!(lower_camel_case("TIMEOUT"), "timeout");
        assert_eq!(lower_camel_case("API_BASE_URL"), "apiBaseUrl");
        assert_eq!(lower_camel_case("_private"), "_private");
        assert_eq!(lower_camel_case(""), "");
    }

    #[test]
    fn test_conventions() {
        assert_eq!(LOUD_SNAKE.constant_name("maxUsers"), "MAX_USERS");
        assert_eq!(LOUD_SNAKE.enum_value_name("Red"), "Red");
        assert_eq!(LOWER_CAMEL.constant_name("MAX_USERS"), "maxUsers");
        assert_eq!(LOWER_CAMEL.enum_value_name("RED"), "red");
    }
}
