pub mod base;
pub mod error;
pub mod escape;
pub mod generator;
pub mod naming;
pub mod sink;
pub mod traits;
pub mod type_table;

// Language renderers
pub mod emitters;

// Re-exports
pub use base::{Affixes, BaseRenderer, CommentStyle};
pub use error::{CodegenError, RenderError};
pub use generator::{render_target, render_to_string, Generator, TargetOutcome};
pub use sink::Sink;
pub use traits::Renderer;
