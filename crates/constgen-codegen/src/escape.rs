//! String literal escaping for double-quoted, backslash-escaped literals.

/// Escape `value` for a C-family double-quoted literal (also valid for
/// Python, JavaScript, Java, Rust and R). Does not add the quotes.
pub fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        push_escaped(&mut out, c);
    }
    out
}

/// Like [`escape_double_quoted`], but also escapes `$`, which starts an
/// interpolation in Dart strings.
pub fn escape_dart(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '$' {
            out.push_str("\\$");
        } else {
            push_escaped(&mut out, c);
        }
    }
    out
}

/// `"value"`, escaped for C-family languages.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", escape_double_quoted(value))
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        _ => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_double_quoted("hello world"), "hello world");
        assert_eq!(escape_double_quoted(""), "");
    }

    #[test]
    fn test_quotes_and_newlines() {
        assert_eq!(
            escape_double_quoted("He said \"hi\"\n"),
            "He said \\\"hi\\\"\\n"
        );
    }

    #[test]
    fn test_backslash_escaped_first() {
        assert_eq!(escape_double_quoted(r"C:\path"), r"C:\\path");
        assert_eq!(escape_double_quoted("\\n"), "\\\\n");
    }

    #[test]
    fn test_tab_and_carriage_return() {
        assert_eq!(escape_double_quoted("a\tb\r\n"), "a\\tb\\r\\n");
    }

    #[test]
    fn test_dart_escapes_interpolation() {
        assert_eq!(escape_dart("costs $5"), "costs \\$5");
        assert_eq!(escape_dart("\"${x}\""), "\\\"\\${x}\\\"");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
