//! Dependency-presence queries.
//!
//! The entry-point generator never walks a dependency graph itself; it asks
//! an injected resolver whether a named library appears anywhere in the
//! consuming project's transitive closure. That keeps the generator free of
//! build-system specifics.

use std::collections::HashSet;

/// Answers whether a library is in the project's transitive dependencies.
pub trait DependencyResolver {
    fn has_transitive_dependency(&self, name: &str) -> bool;
}

impl<F> DependencyResolver for F
where
    F: Fn(&str) -> bool,
{
    fn has_transitive_dependency(&self, name: &str) -> bool {
        self(name)
    }
}

/// Resolver backed by a flat set of dependency names.
#[derive(Debug, Clone, Default)]
pub struct DependencySet {
    names: HashSet<String>,
}

impl DependencySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }
}

impl DependencyResolver for DependencySet {
    fn has_transitive_dependency(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for DependencySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
