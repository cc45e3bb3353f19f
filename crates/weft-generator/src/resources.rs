//! Resource-file enumeration.
//!
//! Lists resource files under the project's resource roots with their
//! root-relative paths, excluding generated/build-output locations, and
//! detects a user-authored file at the reserved entry-point path.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Resource scanning errors.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for resource scanning.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Reserved root-relative path the generator owns.
pub const RESERVED_INDEX_PATH: &str = "public/index.html";

/// A resource file with its root-relative path.
#[derive(Debug, Clone)]
pub struct ResourceFile {
    /// Resource root the file was found under.
    pub root: PathBuf,
    /// Absolute (or root-joined) path of the file.
    pub path: PathBuf,
    /// Root-relative path with unix separators.
    pub relative: String,
}

/// Scans resource roots for files, skipping excluded directories.
#[derive(Debug, Clone, Default)]
pub struct ResourceScanner {
    roots: Vec<PathBuf>,
    excluded: Vec<PathBuf>,
}

impl ResourceScanner {
    /// Create a scanner over the given resource roots.
    #[must_use]
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            roots: roots.into_iter().collect(),
            excluded: Vec::new(),
        }
    }

    /// Exclude a directory subtree from scanning.
    #[must_use]
    pub fn exclude(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded.push(dir.into());
        self
    }

    /// Enumerate all resource files under the roots.
    ///
    /// Nonexistent roots are skipped rather than treated as errors.
    pub fn scan(&self) -> Result<Vec<ResourceFile>> {
        let mut files = Vec::new();

        for root in &self.roots {
            if !root.exists() {
                continue;
            }

            for entry in WalkDir::new(root) {
                let entry = entry?;
                if !entry.file_type().is_file() {
                    continue;
                }

                let path = entry.path();
                if self.excluded.iter().any(|ex| path.starts_with(ex)) {
                    continue;
                }

                let relative = unix_relative(path.strip_prefix(root).unwrap_or(path));
                files.push(ResourceFile {
                    root: root.clone(),
                    path: path.to_path_buf(),
                    relative,
                });
            }
        }

        Ok(files)
    }
}

/// Find a user-authored file at the reserved entry-point path, if any.
///
/// Only the first hit is reported; the advisory stays a single diagnostic
/// per run even when several roots carry the file.
#[must_use]
pub fn find_reserved_index(files: &[ResourceFile]) -> Option<&ResourceFile> {
    files.iter().find(|f| f.relative == RESERVED_INDEX_PATH)
}

fn unix_relative(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_scan_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("resources");
        fs::create_dir_all(root.join("public/images")).unwrap();
        fs::write(root.join("public/images/logo.png"), b"png").unwrap();
        fs::write(root.join("public/favicon.ico"), b"ico").unwrap();

        let scanner = ResourceScanner::new([root.clone()]);
        let mut relatives: Vec<String> =
            scanner.scan().unwrap().into_iter().map(|f| f.relative).collect();
        relatives.sort();

        assert_eq!(relatives, ["public/favicon.ico", "public/images/logo.png"]);
    }

    #[test]
    fn test_scan_excludes_build_output() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("resources");
        let build = root.join("build");
        fs::create_dir_all(&build).unwrap();
        fs::write(root.join("site.css"), b"css").unwrap();
        fs::create_dir_all(build.join("public")).unwrap();
        fs::write(build.join("public/index.html"), b"generated").unwrap();

        let scanner = ResourceScanner::new([root.clone()]).exclude(&build);
        let files = scanner.scan().unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].relative, "site.css");
    }

    #[test]
    fn test_scan_skips_missing_roots() {
        let scanner = ResourceScanner::new([PathBuf::from("/nonexistent/resources")]);
        assert!(scanner.scan().unwrap().is_empty());
    }

    #[test]
    fn test_find_reserved_index() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("resources");
        fs::create_dir_all(root.join("public")).unwrap();
        fs::write(root.join("public/index.html"), b"<html></html>").unwrap();
        fs::write(root.join("public/other.html"), b"<html></html>").unwrap();

        let files = ResourceScanner::new([root]).scan().unwrap();
        let reserved = find_reserved_index(&files).expect("reserved file found");

        assert_eq!(reserved.relative, RESERVED_INDEX_PATH);
    }
}
