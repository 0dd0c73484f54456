pub mod c_lang;
pub mod dart;
pub mod java;
pub mod javascript;
pub mod python;
pub mod python2;
pub mod r_lang;
pub mod rust_lang;
pub mod vue;

use constgen_spec::{OutputConfig, Target};

use crate::sink::Sink;
use crate::traits::Renderer;

/// Create the renderer for `target`, writing into `sink`.
pub fn create_renderer<'a>(
    target: Target,
    sink: Sink<'a>,
    output: &OutputConfig,
) -> Box<dyn Renderer + 'a> {
    match target {
        Target::Python => Box::new(python::PythonRenderer::new(sink, output)),
        Target::Python2 => Box::new(python2::Python2Renderer::new(sink, output)),
        Target::Javascript => Box::new(javascript::JavascriptRenderer::new(sink, output)),
        Target::Vue => Box::new(vue::VueRenderer::new(sink, output)),
        Target::C => Box::new(c_lang::CRenderer::new(sink, output)),
        Target::Java => Box::new(java::JavaRenderer::new(sink, output)),
        Target::Rust => Box::new(rust_lang::RustRenderer::new(sink, output)),
        Target::R => Box::new(r_lang::RRenderer::new(sink, output)),
        Target::Dart => Box::new(dart::DartRenderer::new(sink, output)),
    }
}
