use constgen_spec::{Constant, Enumeration, OutputConfig};

use crate::base::{literal, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::escape;
use crate::naming::LOWER_CAMEL;
use crate::sink::Sink;
use crate::traits::Renderer;

/// Dart renderer, following Dart naming style: `lowerCamelCase` constants
/// and lower-case enum members.
#[derive(Debug)]
pub struct DartRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> DartRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::SLASHES),
        }
    }
}

fn quote_dart(value: &str) -> String {
    format!("\"{}\"", escape::escape_dart(value))
}

impl Renderer for DartRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        self.base.emit_header()?;
        self.base.line("library constants;")?;
        self.base.write("\n")
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        let value = literal(constant, quote_dart)?;
        let name = LOWER_CAMEL.constant_name(constant.name());
        self.base.line(&format!("const {name} = {value};"))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        let values: Vec<String> = enumeration
            .values()
            .iter()
            .map(|v| LOWER_CAMEL.enum_value_name(v))
            .collect();
        self.base.line(&format!("enum {} {{", enumeration.name()))?;
        self.base.line(&format!("  {}", values.join(",\n  ")))?;
        self.base.line("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::test_support::{color, render};
    use constgen_spec::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dart_output() {
        let out = render(
            Target::Dart,
            &OutputConfig::new("lib/constants.dart").with_comment("Shared constants"),
            &[
                Constant::new("MAX_USERS", 100),
                Constant::new("PRICE_LABEL", "costs $5\n"),
            ],
            &[color()],
        );
        assert_eq!(
            out,
            "// Shared constants\n\
             library constants;\n\
             \n\
             const maxUsers = 100;\n\
             const priceLabel = \"costs \\$5\\n\";\n\
             enum Color {\n\
             \x20 red,\n\
             \x20 green,\n\
             \x20 blue\n\
             }\n"
        );
    }
}
