//! Core types and configuration for Weft.
//!
//! Shared between the build-time generators: site configuration loading,
//! route prefix handling, and common error types.

pub mod config;
pub mod error;
pub mod route;

pub use config::{BuildTarget, Config, ServerConfig, SiteConfig};
pub use error::{CoreError, Result};
pub use route::RoutePrefix;
