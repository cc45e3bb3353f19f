//! Head-entry accumulation for the generated entry point.
//!
//! Entries are ordered markup fragments destined for the document's
//! `<head>`; the sequence is append-only during generation and renders in
//! insertion order.

/// Ordered collection of head markup fragments.
#[derive(Debug, Clone, Default)]
pub struct HeadElements {
    entries: Vec<String>,
}

impl HeadElements {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw markup fragment.
    pub fn push(&mut self, markup: impl Into<String>) {
        self.entries.push(markup.into());
    }

    /// Append a stylesheet `<link>` for the given href.
    pub fn link_stylesheet(&mut self, href: &str) {
        self.push(format!(r#"<link rel="stylesheet" href="{href}">"#));
    }

    /// The accumulated fragments, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether no fragments have been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join the fragments for insertion into the head block.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries.join("\n    ")
    }
}
