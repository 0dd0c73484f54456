use constgen_spec::{Constant, Enumeration};

use crate::error::RenderError;

/// Target-language renderer.
///
/// Each implementation owns one [`Sink`](crate::Sink) for the duration of a
/// generation pass. The driver calls `emit_header` once, then comments,
/// constants and enums in document order, then `emit_footer` once. Calls
/// never overlap.
pub trait Renderer {
    /// Write the file preamble (header comment, imports, wrappers).
    fn emit_header(&mut self) -> Result<(), RenderError>;

    /// Write `text` as a comment block, one comment line per input line,
    /// optionally preceded by a blank line.
    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError>;

    /// Write one constant definition.
    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError>;

    /// Write one enumeration.
    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError>;

    /// Close whatever `emit_header` opened. Nothing by default.
    fn emit_footer(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
