//! Generated-source rendering for the icon manifest compiler.
//!
//! Every category grouping is validated before any source is rendered, and
//! the output file is written in a single shot, so a failing manifest never
//! leaves partial output behind.

use std::{collections::BTreeMap, fmt, fs, path::Path};

use thiserror::Error;
use tracing::{debug, info};

use crate::manifest::{self, CategorySet, IconCategory, ManifestError};

/// Icon compilation errors.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Manifest parsing error.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// Icons whose category sets are not an allowed combination. All
    /// violations are collected before failing.
    #[error("found invalid category groupings: {}", format_groupings(.0))]
    InvalidGroupings(Vec<InvalidGrouping>),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for icon compilation.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// An icon whose category set violates the allowed combinations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidGrouping {
    /// Raw icon name from the manifest.
    pub name: String,
    /// The categories it was actually found under.
    pub categories: CategorySet,
}

impl fmt::Display for InvalidGrouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cats: Vec<&str> = self
            .categories
            .iter()
            .map(|c| c.variant_name())
            .collect();
        write!(f, "{}={{{}}}", self.name, cats.join(", "))
    }
}

fn format_groupings(groupings: &[InvalidGrouping]) -> String {
    groupings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// How a generated function selects its icon category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconDispatch {
    /// Solid + Regular icons take a caller-supplied style, defaulting to
    /// outline through `IconStyle::default()`.
    Styleable,
    /// Single-category icons are pinned to that category.
    Fixed(IconCategory),
}

impl IconDispatch {
    /// Classify a category set, or `None` if the combination is not allowed.
    ///
    /// Allowed sets are the three singletons and {Solid, Regular}.
    #[must_use]
    pub fn classify(categories: &CategorySet) -> Option<Self> {
        match categories.len() {
            1 => categories.iter().next().copied().map(Self::Fixed),
            2 if categories.contains(&IconCategory::Solid)
                && categories.contains(&IconCategory::Regular) =>
            {
                Some(Self::Styleable)
            }
            _ => None,
        }
    }
}

/// Validate every icon's grouping, batch-reporting all violations.
fn validate(
    icons: &BTreeMap<String, CategorySet>,
) -> Result<Vec<(&str, IconDispatch)>> {
    let mut dispatches = Vec::with_capacity(icons.len());
    let mut invalid = Vec::new();

    for (name, categories) in icons {
        match IconDispatch::classify(categories) {
            Some(dispatch) => dispatches.push((name.as_str(), dispatch)),
            None => invalid.push(InvalidGrouping {
                name: name.clone(),
                categories: categories.clone(),
            }),
        }
    }

    if invalid.is_empty() {
        Ok(dispatches)
    } else {
        Err(CodegenError::InvalidGroupings(invalid))
    }
}

/// Derive the generated function name, e.g. "align-left" -> "fa_align_left".
fn function_name(raw: &str) -> String {
    let segments: Vec<String> = raw
        .split('-')
        .filter(|s| !s.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    format!("fa_{}", segments.join("_"))
}

/// Static header emitted ahead of the per-icon functions.
const HEADER: &str = r##"// THIS FILE IS AUTOGENERATED.
//
// Do not edit this file by hand. Instead, update the icon manifest and
// rerun `weft icons`.

#![allow(dead_code)]

/// Font Awesome icon families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCategory {
    Regular,
    Solid,
    Brand,
}

impl IconCategory {
    fn class_name(self) -> &'static str {
        match self {
            IconCategory::Regular => "far",
            IconCategory::Solid => "fas",
            IconCategory::Brand => "fab",
        }
    }
}

/// Style selector for icons available in both outline and filled families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconStyle {
    Filled,
    #[default]
    Outline,
}

impl IconStyle {
    fn category(self) -> IconCategory {
        match self {
            IconStyle::Filled => IconCategory::Solid,
            IconStyle::Outline => IconCategory::Regular,
        }
    }
}

/// Render the markup fragment for a named icon.
pub fn fa_icon(name: &str, category: IconCategory) -> String {
    format!(r#"<i class="{} fa-{}"></i>"#, category.class_name(), name)
}
"##;

/// Render the full generated source for a validated icon mapping.
pub fn render(icons: &BTreeMap<String, CategorySet>) -> Result<String> {
    let dispatches = validate(icons)?;

    let mut out = String::from(HEADER);
    for (name, dispatch) in dispatches {
        let fn_name = function_name(name);
        out.push('\n');
        match dispatch {
            IconDispatch::Styleable => {
                out.push_str(&format!(
                    "pub fn {fn_name}(style: IconStyle) -> String {{\n    fa_icon(\"{name}\", style.category())\n}}\n"
                ));
            }
            IconDispatch::Fixed(category) => {
                out.push_str(&format!(
                    "pub fn {fn_name}() -> String {{\n    fa_icon(\"{name}\", IconCategory::{})\n}}\n",
                    category.variant_name()
                ));
            }
        }
    }

    Ok(out)
}

/// Compile manifest text straight to generated source.
pub fn compile_str(text: &str) -> Result<String> {
    let icons = manifest::parse_manifest(text)?;
    render(&icons)
}

/// Compile a manifest file into a generated Rust source file.
///
/// The output is a pure function of the manifest contents: when the on-disk
/// output already matches, the file is left untouched so downstream build
/// caching stays warm.
pub fn compile(manifest_path: &Path, out_path: &Path) -> Result<()> {
    let text = fs::read_to_string(manifest_path)?;
    let source = compile_str(&text)?;

    if let Ok(existing) = fs::read_to_string(out_path) {
        if existing == source {
            debug!(path = %out_path.display(), "generated icons are up to date");
            return Ok(());
        }
    }

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(out_path, &source)?;

    info!(
        manifest = %manifest_path.display(),
        path = %out_path.display(),
        "generated icon bindings"
    );
    Ok(())
}
