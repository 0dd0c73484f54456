use std::io::Write;

use crate::error::RenderError;

/// Exclusive, borrowed output destination of one renderer.
///
/// The sink does not own the underlying writer: whoever opened it keeps it
/// in scope and closes it once rendering returns, whatever the outcome.
pub struct Sink<'a> {
    out: &'a mut dyn Write,
    label: String,
}

impl<'a> Sink<'a> {
    /// `label` names the destination in error messages (usually its path).
    pub fn new(out: &'a mut dyn Write, label: impl Into<String>) -> Self {
        Self {
            out,
            label: label.into(),
        }
    }

    /// Write `text` as is.
    pub fn write(&mut self, text: &str) -> Result<(), RenderError> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|source| RenderError::Sink {
                sink: self.label.clone(),
                source,
            })
    }

    /// Write `line` followed by a newline.
    pub fn line(&mut self, line: &str) -> Result<(), RenderError> {
        self.write(line)?;
        self.write("\n")
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink").field("label", &self.label).finish()
    }
}
