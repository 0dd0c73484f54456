use std::path::Path;
use std::sync::OnceLock;

use constgen_spec::{Constant, Enumeration, OutputConfig};
use regex::Regex;

use crate::base::{literal, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::escape;
use crate::naming::LOUD_SNAKE;
use crate::sink::Sink;
use crate::traits::Renderer;

/// C header renderer: preprocessor constants and `typedef enum`s inside an
/// include guard.
#[derive(Debug)]
pub struct CRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> CRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::SLASHES),
        }
    }
}

/// Include guard for `path`: every character that is not an ASCII letter
/// or digit becomes `_`, then the whole is upper-cased
/// (`include/app/constants.h` → `INCLUDE_APP_CONSTANTS_H`). A leading digit
/// gets a `_` prefix so the macro name stays valid.
pub fn guard_name(path: &Path) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let non_alnum =
        NON_ALNUM.get_or_init(|| Regex::new(r"[^A-Za-z0-9]").expect("guard regex is valid"));
    let guard = non_alnum
        .replace_all(&path.to_string_lossy(), "_")
        .to_uppercase();
    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{guard}")
    } else {
        guard
    }
}

impl Renderer for CRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        let guard = guard_name(self.base.path());
        self.base.emit_header()?;
        self.base.line(&format!("#ifndef {guard}"))?;
        self.base.line(&format!("#define {guard}"))
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        let value = literal(constant, escape::quote)?;
        let name = LOUD_SNAKE.constant_name(constant.name());
        self.base.line(&format!("#define {name} {value}"))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.base.line(&format!(
            "typedef enum {{ {} }} {};",
            enumeration.values().join(", "),
            enumeration.name()
        ))
    }

    fn emit_footer(&mut self) -> Result<(), RenderError> {
        let guard = guard_name(self.base.path());
        self.base.emit_footer()?;
        self.base.line(&format!("\n#endif /* {guard} */"))
    }
}
