//! Route prefix normalization.
//!
//! A site can be served under a sub-path of its domain (e.g. behind a
//! reverse proxy at `/app`). The prefix is prepended to every site-internal
//! root-relative URL so generated references resolve no matter which page
//! loaded them.

use std::fmt;

/// A normalized route prefix.
///
/// Always either empty or of the form `/seg(/seg)*` with no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePrefix(String);

impl RoutePrefix {
    /// Create a prefix from raw user input, normalizing slashes.
    ///
    /// `""`, `"/"`, `"app"`, `"/app"`, and `"app/"` all normalize to the
    /// expected form.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{}", segments.join("/")))
        }
    }

    /// The normalized prefix string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether no prefix is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Prepend the prefix to a root-relative path.
    ///
    /// The path is grounded with a leading slash first, so
    /// `prefix("/app").prepend("main.js")` is `/app/main.js`.
    #[must_use]
    pub fn prepend(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }
}

impl fmt::Display for RoutePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
