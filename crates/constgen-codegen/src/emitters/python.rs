use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{Affixes, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::sink::Sink;
use crate::traits::Renderer;

/// Python 3 renderer. Enums become `IntEnum` subclasses.
#[derive(Debug)]
pub struct PythonRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> PythonRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::HASH),
        }
    }
}

impl Renderer for PythonRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()?;
        self.base.line("from enum import IntEnum")
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.base.emit_constant(constant)
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.base.line(&format!("class {}(IntEnum):", enumeration.name()))?;
        self.base.enum_lines(enumeration, &Affixes::prefix("\t"))?;
        self.base.write("\n")
    }
}
