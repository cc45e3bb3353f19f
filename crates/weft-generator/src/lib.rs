//! Weft Generator Library
//!
//! Build-time generation of the site's HTML entry point.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`head`] - Ordered head-entry accumulation
//! - [`deps`] - Injected dependency-presence queries
//! - [`resources`] - Resource-file enumeration
//! - [`index`] - Entry-point document rendering
//! - [`task`] - One-shot task orchestration

pub mod deps;
pub mod head;
pub mod index;
pub mod resources;
pub mod task;
pub mod template;

pub use deps::{DependencyResolver, DependencySet};
pub use head::HeadElements;
pub use index::{IndexGenerator, apply_companion_stylesheets};
pub use resources::{RESERVED_INDEX_PATH, ResourceFile, ResourceScanner, find_reserved_index};
pub use task::{IndexReport, SiteIndexTask};
pub use template::{Template, TemplateContext};
