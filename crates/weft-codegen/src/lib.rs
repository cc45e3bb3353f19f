//! Weft icon bindings generator.
//!
//! Compiles a flat text manifest of Font Awesome icon names into a generated
//! Rust module, one function per icon. The pipeline is
//! parse -> group -> validate -> render, and all grouping violations are
//! reported in a single error before anything is written.
//!
//! # Modules
//!
//! - [`manifest`] - Manifest parsing and category grouping
//! - [`codegen`] - Validation and generated-source rendering

pub mod codegen;
pub mod manifest;

pub use codegen::{
    CodegenError, IconDispatch, InvalidGrouping, compile, compile_str, render,
};
pub use manifest::{CategorySet, IconCategory, ManifestError, parse_manifest};
