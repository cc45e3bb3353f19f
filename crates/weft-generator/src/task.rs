//! Site index task orchestration.
//!
//! One-shot build step: check companion dependencies, scan resources for a
//! user-authored reserved file (advisory only), render the entry point, and
//! write it under the generated-resources root.

use std::{fs, path::PathBuf};

use thiserror::Error;
use tracing::{error, info};
use weft_core::{BuildTarget, Config};

use crate::{
    deps::DependencyResolver,
    head::HeadElements,
    index::{IndexError, IndexGenerator, apply_companion_stylesheets},
    resources::{RESERVED_INDEX_PATH, ResourceError, ResourceScanner, find_reserved_index},
};

/// Task errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Index rendering error.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Resource scanning error.
    #[error("resource error: {0}")]
    Resource(#[from] ResourceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Outcome of a site index generation run.
#[derive(Debug, Clone)]
pub struct IndexReport {
    /// Where the generated document was written.
    pub output_path: PathBuf,

    /// A user-authored file found at the reserved path, if any. Advisory;
    /// the generated file was produced regardless.
    pub reserved_index: Option<PathBuf>,
}

/// Generates the site's `index.html` entry point.
#[derive(Debug)]
pub struct SiteIndexTask {
    config: Config,
    build_target: BuildTarget,
    gen_res_dir: PathBuf,
    public_path: String,
    resource_roots: Vec<PathBuf>,
    head: HeadElements,
}

impl SiteIndexTask {
    /// Create a new task writing under the given generated-resources root.
    #[must_use]
    pub fn new(config: Config, build_target: BuildTarget, gen_res_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            build_target,
            gen_res_dir: gen_res_dir.into(),
            public_path: "public".to_string(),
            resource_roots: Vec::new(),
            head: HeadElements::new(),
        }
    }

    /// Override the public path under the generated-resources root.
    #[must_use]
    pub fn with_public_path(mut self, public_path: impl Into<String>) -> Self {
        self.public_path = public_path.into();
        self
    }

    /// Add a resource root to scan for the reserved file.
    #[must_use]
    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_roots.push(root.into());
        self
    }

    /// Seed an extra head entry ahead of the companion checks.
    #[must_use]
    pub fn with_head_entry(mut self, markup: impl Into<String>) -> Self {
        self.head.push(markup);
        self
    }

    /// Where the generated document will be written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.gen_res_dir.join(&self.public_path).join("index.html")
    }

    /// Run the task: accumulate head entries, scan resources, render, write.
    pub fn run(&self, resolver: &dyn DependencyResolver) -> Result<IndexReport> {
        let mut head = self.head.clone();
        apply_companion_stylesheets(&mut head, resolver);

        let reserved_index = self.check_reserved_index()?;

        let generator = IndexGenerator::new(self.config.clone(), self.build_target);
        let html = generator.render(&head)?;

        let output_path = self.output_path();
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;

        info!(
            path = %output_path.display(),
            target = ?self.build_target,
            "generated site entry point"
        );

        Ok(IndexReport {
            output_path,
            reserved_index,
        })
    }

    /// Scan resource roots for a hand-authored reserved file.
    ///
    /// A hit is an error-severity diagnostic, not a failure: the generated
    /// document is produced either way.
    fn check_reserved_index(&self) -> Result<Option<PathBuf>> {
        let scanner = ResourceScanner::new(self.resource_roots.iter().cloned())
            .exclude(self.gen_res_dir.clone());
        let files = scanner.scan()?;

        let reserved = find_reserved_index(&files).map(|f| f.path.clone());
        if let Some(path) = &reserved {
            error!(
                path = %path.display(),
                "you are not supposed to author {RESERVED_INDEX_PATH} yourself; weft \
                 generates it. Seed extra head entries on the index task to customize \
                 the generated document"
            );
        }

        Ok(reserved)
    }
}

#[cfg(test)]
mod tests {
    use weft_core::{ServerConfig, SiteConfig};

    use super::*;
    use crate::deps::DependencySet;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                route_prefix: String::new(),
            },
            server: ServerConfig {
                dev_script: "build/main.js".to_string(),
            },
        }
    }

    #[test]
    fn test_run_writes_entry_point() {
        let dir = tempfile::tempdir().unwrap();
        let gen_dir = dir.path().join("generated");

        let task = SiteIndexTask::new(test_config(), BuildTarget::Release, &gen_dir);
        let report = task.run(&DependencySet::new()).unwrap();

        assert_eq!(report.output_path, gen_dir.join("public/index.html"));
        assert!(report.reserved_index.is_none());

        let html = fs::read_to_string(&report.output_path).unwrap();
        assert!(html.contains("<title>Test Site</title>"));
    }

    #[test]
    fn test_run_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let gen_dir = dir.path().join("generated");
        fs::create_dir_all(gen_dir.join("public")).unwrap();
        fs::write(gen_dir.join("public/index.html"), "stale").unwrap();

        let task = SiteIndexTask::new(test_config(), BuildTarget::Release, &gen_dir);
        let report = task.run(&DependencySet::new()).unwrap();

        let html = fs::read_to_string(&report.output_path).unwrap();
        assert!(html.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_reserved_file_is_advisory() {
        let dir = tempfile::tempdir().unwrap();
        let gen_dir = dir.path().join("generated");
        let resources = dir.path().join("resources");
        fs::create_dir_all(resources.join("public")).unwrap();
        fs::write(resources.join("public/index.html"), "<html>mine</html>").unwrap();

        let task = SiteIndexTask::new(test_config(), BuildTarget::Debug, &gen_dir)
            .with_resource_root(&resources);
        let report = task.run(&DependencySet::new()).unwrap();

        assert_eq!(
            report.reserved_index,
            Some(resources.join("public/index.html"))
        );
        assert!(report.output_path.exists(), "generation still succeeds");
    }

    #[test]
    fn test_own_output_is_not_flagged() {
        let dir = tempfile::tempdir().unwrap();
        let gen_dir = dir.path().join("generated");

        let task = SiteIndexTask::new(test_config(), BuildTarget::Release, &gen_dir)
            .with_resource_root(&gen_dir);

        // First run creates generated/public/index.html; a second run scanning
        // the same root must not mistake it for a user-authored file.
        task.run(&DependencySet::new()).unwrap();
        let report = task.run(&DependencySet::new()).unwrap();

        assert!(report.reserved_index.is_none());
    }

    #[test]
    fn test_seeded_head_entry_precedes_companions() {
        let dir = tempfile::tempdir().unwrap();
        let gen_dir = dir.path().join("generated");

        let deps: DependencySet = ["weft-icons-fa"].into_iter().collect();
        let task = SiteIndexTask::new(test_config(), BuildTarget::Release, &gen_dir)
            .with_head_entry(r#"<meta name="description" content="demo">"#);
        let report = task.run(&deps).unwrap();

        let html = fs::read_to_string(&report.output_path).unwrap();
        let meta = html.find("name=\"description\"").unwrap();
        let fa = html.find("font-awesome").unwrap();
        assert!(meta < fa);
    }
}
