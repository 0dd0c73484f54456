pub mod common;
pub mod constant;
pub mod document;
pub mod enumeration;
pub mod error;
