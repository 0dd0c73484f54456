use std::path::Path;

use constgen_spec::{ConstValue, Constant, Enumeration, OutputConfig};

use crate::base::{literal, BaseRenderer, CommentStyle};
use crate::error::RenderError;
use crate::escape;
use crate::naming::LOUD_SNAKE;
use crate::sink::Sink;
use crate::traits::Renderer;
use crate::type_table::JAVA_TYPES;

/// Java renderer: a final class named after the output file, holding
/// `static final` fields and nested enums.
#[derive(Debug)]
pub struct JavaRenderer<'a> {
    base: BaseRenderer<'a>,
}

impl<'a> JavaRenderer<'a> {
    pub fn new(sink: Sink<'a>, output: &OutputConfig) -> Self {
        Self {
            base: BaseRenderer::new(sink, output, CommentStyle::SLASHES.indented(1)),
        }
    }
}

/// Output file name without its extension (`src/AppConstants.java` →
/// `AppConstants`).
pub fn class_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Renderer for JavaRenderer<'_> {
    fn emit_header(&mut self) -> Result<(), RenderError> {
        let name = class_name(self.base.path());
        self.base.emit_header()?;
        self.base.line(&format!("public final class {name} {{"))
    }

    fn emit_comment(&mut self, text: &str, leading_blank_line: bool) -> Result<(), RenderError> {
        self.base.emit_comment(text, leading_blank_line)
    }

    fn emit_constant(&mut self, constant: &Constant) -> Result<(), RenderError> {
        let type_name = JAVA_TYPES.type_name(constant.value());
        let mut value = literal(constant, escape::quote)?;
        let wide = type_name == JAVA_TYPES.wide_integer;
        if wide && matches!(constant.value(), ConstValue::Integer(_)) {
            value.push('L');
        }
        let name = LOUD_SNAKE.constant_name(constant.name());
        self.base.line(&format!("\tpublic static final {type_name} {name} = {value};"))
    }

    fn emit_enum(&mut self, enumeration: &Enumeration) -> Result<(), RenderError> {
        self.base.line(&format!("\tpublic enum {} {{", enumeration.name()))?;
        self.base.line(&format!("\t\t{}", enumeration.values().join(",\n\t\t")))?;
        self.base.line("\t}")
    }

    fn emit_footer(&mut self) -> Result<(), RenderError> {
        self.base.emit_footer()?;
        self.base.line("\n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::test_support::{color, render};
    use constgen_spec::Target;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_name_from_path() {
        assert_eq!(class_name(Path::new("src/main/AppConstants.java")), "AppConstants");
        assert_eq!(class_name(Path::new("Constants")), "Constants");
    }

    #[test]
    fn test_java_output() {
        let out = render(
            Target::Java,
            &OutputConfig::new("gen/Constants.java").with_comment("Shared constants"),
            &[
                Constant::new("maxUsers", 100),
                Constant::new("BIG", 5_000_000_000_i64),
                Constant::new("GREETING", "hi"),
            ],
            &[color()],
        );
        assert_eq!(
            out,
            "// Shared constants\n\
             public final class Constants {\n\
             \tpublic static final int MAX_USERS = 100;\n\
             \tpublic static final long BIG = 5000000000L;\n\
             \tpublic static final String GREETING = \"hi\";\n\
             \tpublic enum Color {\n\
             \t\tRED,\n\
             \t\tGREEN,\n\
             \t\tBLUE\n\
             \t}\n\
             \n\
             }\n"
        );
    }

    #[test]
    fn test_carriage_return_stays_inside_header_comment() {
        let output = OutputConfig::new("C.java").with_comment("Generated\rint injected = 1;");
        let out = render(Target::Java, &output, &[], &[]);
        assert_eq!(out, "// Generated\n// int injected = 1;\npublic final class C {\n\n}\n");
    }

    #[test]
    fn test_java_section_comments_are_indented() {
        let mut buf = Vec::new();
        {
            let output = OutputConfig::new("C.java");
            let mut r = JavaRenderer::new(Sink::new(&mut buf, "memory"), &output);
            r.emit_comment("constants", true).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "\n\t// constants\n");
    }
}
