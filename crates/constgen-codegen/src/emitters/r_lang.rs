use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{Affixes, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::naming::loud_snake_case;
use crate::sink::Sink;
use crate::traits::Renderer;

/// R renderer. Uses `<-` assignment; enum members become prefixed integer
/// variables as in the Python 2 output.
#[derive(Debug)]
pub struct RRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> RRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::HASH),
        }
    }
}

impl Renderer for RRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        self.base.constant_line(constant, &Affixes::default().assignment("<-"))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        let prefix = format!("{}_", loud_snake_case(enumeration.name()));
        self.base.enum_lines(enumeration, &Affixes::prefix(prefix).assignment("<-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::test_support::{color, render};
    use constgen_spec::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_r_output() {
        let out = render(
            Target::R,
            &OutputConfig::new("R/constants.R").with_comment("Shared constants"),
            &[Constant::new("MAX_USERS", 100), Constant::new("LABEL", "a\tb")],
            &[color()],
        );
        assert_eq!(
            out,
            "# Shared constants\n\
             MAX_USERS <- 100\n\
             LABEL <- \"a\\tb\"\n\
             COLOR_RED <- 0\n\
             COLOR_GREEN <- 1\n\
             COLOR_BLUE <- 2\n"
        );
    }
}
