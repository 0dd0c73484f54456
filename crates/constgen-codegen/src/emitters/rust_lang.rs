use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{literal, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::escape;
use crate::naming::LOUD_SNAKE;
use crate::sink::Sink;
use crate::traits::Renderer;
use crate::type_table::RUST_TYPES;

/// Rust renderer: typed `pub const` items and plain `pub enum`s, whose
/// discriminants follow declaration order.
#[derive(Debug)]
pub struct RustRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> RustRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::SLASHES),
        }
    }
}

impl Renderer for RustRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        let value = literal(constant, escape::quote)?;
        let type_name = RUST_TYPES.type_name(constant.value());
        let name = LOUD_SNAKE.constant_name(constant.name());
        self.base.line(&format!("pub const {name}: {type_name} = {value};"))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.base.line(&format!("pub enum {} {{", enumeration.name()))?;
        self.base.line(&format!("\t{}", enumeration.values().join(",\n\t")))?;
        self.base.line("}")
    }
}
