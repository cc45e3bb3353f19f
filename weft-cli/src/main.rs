use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use eyre::{Result, WrapErr};
use tracing::info;
use weft_core::{BuildTarget, Config};
use weft_generator::{DependencySet, SiteIndexTask};

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Build-time generators for Weft sites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the icon manifest into a generated Rust module
    Icons {
        /// Path to the icon manifest file
        #[arg(short, long)]
        manifest: PathBuf,
        /// Path of the generated source file
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Generate the site's index.html entry point
    Index {
        /// Path to the site configuration file
        #[arg(short, long, default_value = "weft.toml")]
        config: PathBuf,
        /// Build target
        #[arg(short, long, value_enum, default_value = "debug")]
        target: Target,
        /// Generated-resources root to write under
        #[arg(long)]
        gen_dir: PathBuf,
        /// Public path under the generated-resources root
        #[arg(long, default_value = "public")]
        public_path: String,
        /// Resource root to scan (repeatable)
        #[arg(long = "resource-root")]
        resource_roots: Vec<PathBuf>,
        /// Name present in the dependency closure (repeatable)
        #[arg(long = "dependency")]
        dependencies: Vec<String>,
        /// Newline-delimited file listing the dependency closure
        #[arg(long)]
        dependencies_file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Target {
    Debug,
    Release,
}

impl From<Target> for BuildTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Debug => BuildTarget::Debug,
            Target::Release => BuildTarget::Release,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Icons { manifest, out } => {
            weft_codegen::compile(&manifest, &out)
                .wrap_err_with(|| format!("failed to compile {}", manifest.display()))?;
            info!(out = %out.display(), "icon bindings ready");
        }
        Commands::Index {
            config,
            target,
            gen_dir,
            public_path,
            resource_roots,
            dependencies,
            dependencies_file,
        } => {
            let config = Config::load(&config)
                .wrap_err_with(|| format!("failed to load {}", config.display()))?;

            let mut deps: DependencySet = dependencies.into_iter().collect();
            if let Some(path) = dependencies_file {
                let listing = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                for line in listing.lines() {
                    let name = line.trim();
                    if !name.is_empty() && !name.starts_with('#') {
                        deps.insert(name);
                    }
                }
            }

            let mut task = SiteIndexTask::new(config, target.into(), gen_dir)
                .with_public_path(public_path);
            for root in resource_roots {
                task = task.with_resource_root(root);
            }

            let report = task.run(&deps)?;
            info!(path = %report.output_path.display(), "site entry point written");
        }
    }

    Ok(())
}
