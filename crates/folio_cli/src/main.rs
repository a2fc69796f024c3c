//! `folio` command line entry point.
//!
//! # Responsibility
//! - Build the static site or render single routes from the core crate.
//! - Load optional content bundles and site config from disk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    default_log_level, init_logging, render_page, ContentRepository, ContentStore, Site,
    SiteBuilder, SiteConfig,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Render the portfolio site as static HTML", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON content bundle replacing the built-in content.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log level for the rolling log files; requires `--log-dir`.
    #[arg(
        long,
        value_parser = ["error", "warn", "info", "debug", "trace"],
        requires = "log_dir",
        global = true
    )]
    log_level: Option<String>,

    /// Directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every page into the output directory.
    Build {
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print the HTML document for one path, e.g. `/project/specs-ai`.
    Render {
        path: String,

        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Print `id<TAB>title<TAB>category` for every project.
    List,

    /// Validate content and report counts.
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let store = load_store(cli.content.as_ref())?;

    match cli.command {
        Commands::Build { out, config } => {
            let mut config = load_config(&config)?;
            if let Some(out) = out {
                config.out_dir = out;
                config = config.normalize()?;
            }
            let report = SiteBuilder::new(&config)
                .build(&store)
                .context("site build failed")?;
            for page in &report.pages {
                println!("{}", page.file.display());
            }
            println!(
                "wrote {} pages ({} bytes) to {}",
                report.page_count(),
                report.total_bytes(),
                report.out_dir.display()
            );
        }
        Commands::Render { path, config } => {
            let config = load_config(&config)?;
            let site = Site::new(&store);
            print!("{}", render_page(&site.open(&path), &config.render_options()));
        }
        Commands::List => {
            for project in store.projects() {
                println!("{}\t{}\t{}", project.id, project.title, project.category);
            }
        }
        Commands::Check => {
            let gallery_items = store
                .projects()
                .iter()
                .map(|project| project.details.gallery.len())
                .sum::<usize>();
            info!(
                "event=content_check module=cli status=ok projects={} gallery_items={}",
                store.projects().len(),
                gallery_items
            );
            println!(
                "ok: {} projects, {} gallery items",
                store.projects().len(),
                gallery_items
            );
        }
    }

    Ok(())
}

fn load_store(content: Option<&PathBuf>) -> Result<ContentStore> {
    match content {
        Some(path) => ContentStore::from_json_path(path)
            .with_context(|| format!("failed to load content bundle `{}`", path.display())),
        None => Ok(ContentStore::builtin()),
    }
}

fn load_config(path: &PathBuf) -> Result<SiteConfig> {
    SiteConfig::load_from(path).with_context(|| format!("failed to load `{}`", path.display()))
}
