use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::error::RenderError;
use crate::sink::Sink;
use crate::traits::Renderer;

use super::javascript::JavascriptRenderer;

/// JavaScript output plus a Vue mixin per enum, so components can use the
/// enum from their templates after adding it to `mixins`.
#[derive(Debug)]
pub struct VueRenderer<'a> {
    js: JavascriptRenderer<'a>,
}

impl<'a> VueRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            js: JavascriptRenderer::new(sink, output),
        }
    }
}

impl Renderer for VueRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.js.emit_header()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.js.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.js.emit_constant(constant)
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.js.emit_enum(enumeration)?;
        let name = enumeration.name();
        self.js.base_mut().write(&format!(
            "\n\
             {name}.Mixin = {{\n\
             \x20 created () {{\n\
             \x20     this.{name} = {name}\n\
             \x20 }}\n\
             }}\n"
        ))
    }
}
