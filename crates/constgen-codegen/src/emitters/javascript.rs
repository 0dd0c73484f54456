use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{Affixes, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::sink::Sink;
use crate::traits::Renderer;

/// JavaScript (ES module) renderer. Enums become exported object literals
/// mapping member names to tags.
#[derive(Debug)]
pub struct JavascriptRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> JavascriptRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::SLASHES),
        }
    }

    /// Underlying base renderer, for renderers layered on top of this one.
    pub fn base_mut(&mut self) -> &mut BaseRenderer<'a> {
        &mut self.base
    }
}

impl Renderer for JavascriptRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.base.constant_line(constant, &Affixes::prefix("export const "))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.base.line(&format!("export const {} = {{", enumeration.name()))?;
        self.base.enum_lines(enumeration, &Affixes::prefix("\t").assignment(":").suffix(","))?;
        self.base.line("}")
    }
}
