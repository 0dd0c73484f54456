use std::path::{Path, PathBuf};

use constgen_spec::{ConstValue, Constant, Enumeration, OutputConfig};

use crate::error::RenderError;
use crate::escape;
use crate::sink::Sink;
use crate::traits::Renderer;

/// Unit of indentation for comment lines.
const INDENT: &str = "\t";

/// Characters that end a line of comment text. `\r\n` counts as one break.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Comment syntax of a target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentStyle {
    /// Line comment token (e.g., "#", "//")
    pub mark: &'static str,
    /// Indent units before every comment line except the header comment
    pub indentation: usize,
}

impl CommentStyle {
    pub const HASH: CommentStyle = CommentStyle {
        mark: "#",
        indentation: 0,
    };

    pub const SLASHES: CommentStyle = CommentStyle {
        mark: "//",
        indentation: 0,
    };

    pub const fn indented(self, indentation: usize) -> Self {
        Self {
            mark: self.mark,
            indentation,
        }
    }
}

/// Pieces around a `name = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affixes {
    pub prefix: String,
    pub assignment: &'static str,
    pub suffix: &'static str,
}

impl Default for Affixes {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            assignment: "=",
            suffix: "",
        }
    }
}

impl Affixes {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn assignment(mut self, assignment: &'static str) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }
}

/// Generic renderer for `name = value` style languages.
///
/// Language renderers wrap a `BaseRenderer` and reuse its building blocks,
/// overriding only what their syntax changes. Used on its own it is a
/// complete renderer: `#` comments, `NAME = value` constants and one
/// `VALUE = tag` line per enum member.
#[derive(Debug)]
pub struct BaseRenderer<'a> {
    sink: Sink<'a>,
    style: CommentStyle,
    path: PathBuf,
    comment: Option<String>,
}

impl<'a> BaseRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig, style: CommentStyle) -> Self {
        Self {
            sink,
            style,
            path: output.path().to_path_buf(),
            comment: output.comment().map(str::to_string),
        }
    }

    /// Destination path of the file being rendered.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write raw text.
    pub fn write(&mut self, text: &str) -> Result<(), RenderError> {
        self.sink.write(text)
    }

    /// Write a line of text.
    pub fn line(&mut self, line: &str) -> Result<(), RenderError> {
        self.sink.line(line)
    }

    /// Write `text` as a comment block, `depth` indent units deep.
    pub fn comment_block(
        &mut self,
        text: &str,
        leading_blank_line: bool,
        depth: usize,
    ) -> Result<(), RenderError> {
        let indent = INDENT.repeat(depth);
        let lines: Vec<String> = split_lines(text)
            .into_iter()
            .map(|line| format!("{}{} {}", indent, self.style.mark, line))
            .collect();

        if leading_blank_line {
            self.sink.write("\n")?;
        }
        self.sink.line(&lines.join("\n"))
    }

    /// Write the configured header comment, if any, without indentation.
    pub fn header_comment(&mut self) -> Result<(), RenderError> {
        match self.comment.clone() {
            Some(comment) if !comment.is_empty() => self.comment_block(&comment, false, 0),
            _ => Ok(()),
        }
    }

    /// `{prefix}{name} {assignment} {value}{suffix}`
    pub fn constant_line(
        &mut self,
        constant: &Constant,
        affixes: &Affixes,
    ) -> Result<(), RenderError> {
        let value = literal(constant, escape::quote)?;
        self.sink.line(&format!(
            "{}{} {} {}{}",
            affixes.prefix,
            constant.name(),
            affixes.assignment,
            value,
            affixes.suffix
        ))
    }

    /// One `{prefix}{value} {assignment} {tag}{suffix}` line per member,
    /// where the tag is the member's zero-based position.
    pub fn enum_lines(
        &mut self,
        enumeration: &Enumeration,
        affixes: &Affixes,
    ) -> Result<(), RenderError> {
        for (tag, value) in enumeration.tagged() {
            self.sink.line(&format!(
                "{}{} {} {}{}",
                affixes.prefix, value, affixes.assignment, tag, affixes.suffix
            ))?;
        }
        Ok(())
    }
}

impl Renderer for BaseRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.header_comment()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        let depth = self.style.indentation;
        self.comment_block(text, leading_blank_line, depth)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.constant_line(constant, &Affixes::default())
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.enum_lines(enumeration, &Affixes::default())
    }
}

/// Split `text` on every line break a target language may honor, so no
/// part of a comment can end up outside its comment marker. A trailing
/// break does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find(&LINE_BREAKS[..]) {
        lines.push(&rest[..start]);
        let tail = &rest[start..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Render a constant's value as a literal: integers verbatim, strings
/// through `quote`. Any other value kind is rejected, even though documents
/// never contain one after validation.
pub fn literal(constant: &Constant, quote: fn(&str) -> String) -> Result<String, RenderError> {
    match constant.value() {
        ConstValue::Integer(i) => Ok(i.to_string()),
        ConstValue::String(s) => Ok(quote(s)),
        other => Err(RenderError::UnsupportedValueType {
            name: constant.name().to_string(),
            kind: other.kind(),
        }),
    }
}
