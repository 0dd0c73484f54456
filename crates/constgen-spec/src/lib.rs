//! Definition document for constgen.
//!
//! A document holds named constants and enumerations plus the set of output
//! targets they should be rendered to. Documents are built from a generic
//! key/value tree (see [`parser`]) and are fully validated on construction,
//! so renderers never see duplicate names or empty enumerations.

pub mod loader;
pub mod parser;
pub mod schema_def;
pub mod types;

// Re-exports
pub use loader::{load_document, load_str, LoadError};
pub use parser::{parse_document, InputFormat};
pub use types::common::{Target, ValueKind};
pub use types::constant::{ConstValue, Constant};
pub use types::document::{Document, OutputConfig};
pub use types::enumeration::Enumeration;
pub use types::error::DefinitionError;
