//! Icon manifest parsing.
//!
//! The manifest is line-oriented UTF-8 text of the form
//! `<prefix>=<name1>,<name2>,...`. Lines starting with `#` are comments and
//! blank lines are skipped. The prefix table is closed: `fas`, `far`, `fab`.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

/// Manifest parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    /// Line without a `=` separator.
    #[error("line {line}: missing '=' separator")]
    MissingSeparator { line: usize },

    /// Prefix not in the category table.
    #[error("line {line}: unknown category prefix: {prefix}")]
    UnknownPrefix { line: usize, prefix: String },
}

/// Result type for manifest parsing.
pub type Result<T> = std::result::Result<T, ManifestError>;

/// One of the three icon families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IconCategory {
    Regular,
    Solid,
    Brand,
}

impl IconCategory {
    /// Map a manifest prefix to its category.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "fas" => Some(Self::Solid),
            "far" => Some(Self::Regular),
            "fab" => Some(Self::Brand),
            _ => None,
        }
    }

    /// CSS class name used by the icon font.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Regular => "far",
            Self::Solid => "fas",
            Self::Brand => "fab",
        }
    }

    /// Enum variant name used in generated source.
    #[must_use]
    pub fn variant_name(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Solid => "Solid",
            Self::Brand => "Brand",
        }
    }
}

/// The set of categories an icon appears under.
pub type CategorySet = BTreeSet<IconCategory>;

/// Parse manifest text into an icon-name to category-set mapping.
///
/// Category sets accumulate across lines; an icon may legitimately appear
/// under several prefixes. The mapping is sorted by name, so iteration
/// order (and hence generated output order) is deterministic.
pub fn parse_manifest(text: &str) -> Result<BTreeMap<String, CategorySet>> {
    let mut icons: BTreeMap<String, CategorySet> = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (prefix, names) = line
            .split_once('=')
            .ok_or(ManifestError::MissingSeparator { line: idx + 1 })?;
        let category =
            IconCategory::from_prefix(prefix).ok_or_else(|| ManifestError::UnknownPrefix {
                line: idx + 1,
                prefix: prefix.to_string(),
            })?;

        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            icons.entry(name.to_string()).or_default().insert(category);
        }
    }

    Ok(icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_category() {
        let icons = parse_manifest("fab=github,twitter").unwrap();

        assert_eq!(icons.len(), 2);
        assert_eq!(
            icons["github"],
            CategorySet::from([IconCategory::Brand])
        );
        assert_eq!(
            icons["twitter"],
            CategorySet::from([IconCategory::Brand])
        );
    }

    #[test]
    fn test_parse_accumulates_across_lines() {
        let icons = parse_manifest("fas=address-book\nfar=address-book").unwrap();

        assert_eq!(icons.len(), 1);
        assert_eq!(
            icons["address-book"],
            CategorySet::from([IconCategory::Solid, IconCategory::Regular])
        );
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let icons = parse_manifest("# Font Awesome manifest\n\nfas=ad\n").unwrap();

        assert_eq!(icons.len(), 1);
        assert!(icons.contains_key("ad"));
    }

    #[test]
    fn test_parse_unknown_prefix() {
        let err = parse_manifest("fas=ad\nfax=oops").unwrap_err();

        assert_eq!(
            err,
            ManifestError::UnknownPrefix {
                line: 2,
                prefix: "fax".to_string()
            }
        );
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = parse_manifest("just-a-name").unwrap_err();

        assert_eq!(err, ManifestError::MissingSeparator { line: 1 });
    }

    #[test]
    fn test_category_class_names() {
        assert_eq!(IconCategory::Regular.class_name(), "far");
        assert_eq!(IconCategory::Solid.class_name(), "fas");
        assert_eq!(IconCategory::Brand.class_name(), "fab");
    }
}
