//! Entry-point document generation.
//!
//! Renders the site's `index.html` from configuration, accumulated head
//! entries, and the build target.

use thiserror::Error;
use tracing::debug;
use weft_core::{BuildTarget, Config};

use crate::{
    deps::DependencyResolver,
    head::HeadElements,
    template::{DEFAULT_INDEX_TEMPLATE, Template, TemplateContext, TemplateError},
};

/// Index rendering errors.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for index generation.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Companion libraries whose presence pulls a stylesheet into the head.
/// Checked in this fixed order, independent of declaration order in the
/// consuming project.
const COMPANION_STYLESHEETS: &[(&str, &str)] = &[
    (
        "weft-icons-fa",
        "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.2.0/css/all.min.css",
    ),
    (
        "weft-icons-mdi",
        "https://cdnjs.cloudflare.com/ajax/libs/MaterialDesign-Webfont/7.0.96/css/materialdesignicons.min.css",
    ),
];

/// Markup injected only into debug builds.
const DEBUG_STATUS_SCRIPT: &str = r#"<script>
        console.info("weft: development build");
    </script>"#;

/// Append stylesheet links for companion libraries present in the
/// dependency closure.
pub fn apply_companion_stylesheets(head: &mut HeadElements, resolver: &dyn DependencyResolver) {
    for (name, href) in COMPANION_STYLESHEETS {
        if resolver.has_transitive_dependency(name) {
            debug!(library = name, "adding companion stylesheet");
            head.link_stylesheet(href);
        }
    }
}

/// Entry-point HTML generator.
#[derive(Debug)]
pub struct IndexGenerator {
    config: Config,
    build_target: BuildTarget,
    template: Template,
}

impl IndexGenerator {
    /// Create a new generator with the default index template.
    #[must_use]
    pub fn new(config: Config, build_target: BuildTarget) -> Self {
        Self {
            config,
            build_target,
            template: Template::new("index", DEFAULT_INDEX_TEMPLATE),
        }
    }

    /// Use a custom index template.
    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    /// The root-relative, prefix-adjusted script reference.
    ///
    /// The script always lives at the site root, so only the last path
    /// segment of the configured script is kept, grounded with a leading
    /// slash and the route prefix. That way the root is searched even when
    /// the document was loaded from a page in a subdirectory.
    #[must_use]
    pub fn script_href(&self) -> String {
        let script = self.config.server.dev_script.as_str();
        let file_name = script.rsplit('/').next().unwrap_or(script);
        self.config.route_prefix().prepend(file_name)
    }

    /// Render the entry-point document.
    pub fn render(&self, head: &HeadElements) -> Result<String> {
        let mut ctx = TemplateContext::new()
            .with_var("title", &self.config.site.title)
            .with_var("script", self.script_href());

        if !head.is_empty() {
            ctx.insert("head", head.render());
        }

        if self.build_target == BuildTarget::Debug {
            ctx.insert("debug", DEBUG_STATUS_SCRIPT);
        }

        Ok(self.template.render(&ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use weft_core::{ServerConfig, SiteConfig};

    use super::*;
    use crate::deps::DependencySet;

    fn test_config(route_prefix: &str, dev_script: &str) -> Config {
        Config {
            site: SiteConfig {
                title: "Test Site".to_string(),
                route_prefix: route_prefix.to_string(),
            },
            server: ServerConfig {
                dev_script: dev_script.to_string(),
            },
        }
    }

    #[test]
    fn test_script_href_is_root_relative() {
        let generator = IndexGenerator::new(
            test_config("/app", "some/deep/build/main.js"),
            BuildTarget::Release,
        );

        assert_eq!(generator.script_href(), "/app/main.js");
    }

    #[test]
    fn test_script_href_without_prefix() {
        let generator =
            IndexGenerator::new(test_config("", "build/main.js"), BuildTarget::Release);

        assert_eq!(generator.script_href(), "/main.js");
    }

    #[test]
    fn test_render_includes_title_and_script() {
        let generator =
            IndexGenerator::new(test_config("", "build/main.js"), BuildTarget::Release);

        let html = generator.render(&HeadElements::new()).unwrap();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Test Site</title>"));
        assert!(html.contains(r#"<script src="/main.js"></script>"#));
    }

    #[test]
    fn test_debug_target_adds_status_script() {
        let config = test_config("", "build/main.js");

        let debug_html = IndexGenerator::new(config.clone(), BuildTarget::Debug)
            .render(&HeadElements::new())
            .unwrap();
        let release_html = IndexGenerator::new(config, BuildTarget::Release)
            .render(&HeadElements::new())
            .unwrap();

        assert!(debug_html.contains("development build"));
        assert!(!release_html.contains("development build"));
    }

    #[test]
    fn test_companion_stylesheet_when_dependency_present() {
        let deps: DependencySet = ["weft-icons-fa"].into_iter().collect();
        let mut head = HeadElements::new();
        apply_companion_stylesheets(&mut head, &deps);

        assert_eq!(head.entries().len(), 1);
        assert!(head.entries()[0].contains("font-awesome/6.2.0/css/all.min.css"));
    }

    #[test]
    fn test_no_companion_stylesheet_when_dependency_absent() {
        let deps = DependencySet::new();
        let mut head = HeadElements::new();
        apply_companion_stylesheets(&mut head, &deps);

        assert!(head.is_empty());
    }

    #[test]
    fn test_companion_check_order_is_fixed() {
        let deps: DependencySet = ["weft-icons-mdi", "weft-icons-fa"].into_iter().collect();
        let mut head = HeadElements::new();
        apply_companion_stylesheets(&mut head, &deps);

        assert_eq!(head.entries().len(), 2);
        assert!(head.entries()[0].contains("font-awesome"));
        assert!(head.entries()[1].contains("materialdesignicons"));
    }
}
