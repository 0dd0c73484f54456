use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{Affixes, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::naming::loud_snake_case;
use crate::sink::Sink;
use crate::traits::Renderer;

/// Python 2 renderer. No enum type, so members become module-level
/// integers prefixed with the enum name (`COLOR_RED = 0`).
#[derive(Debug)]
pub struct Python2Renderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> Python2Renderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::HASH),
        }
    }
}

impl Renderer for Python2Renderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.base.emit_constant(constant)
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        let prefix = format!("{}_", loud_snake_case(enumeration.name()));
        self.base.enum_lines(enumeration, &Affixes::prefix(prefix))
    }
}
