//! reelsort - movie library organizer CLI

mod cli;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelsort::services::{Normalizer, Organizer, Scanner};
use reelsort::Config;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reelsort=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let normalizer = Normalizer::default();

    match cli.command {
        Command::Normalize { names } => {
            for name in names {
                println!("{}", normalizer.normalize(&name));
            }
        }
        Command::Organize { dir, dry_run } => {
            let dir = resolve_dir(dir, &config);
            let summary = Organizer::new(normalizer, dry_run).organize_files(&dir)?;
            println!(
                "examined {} files: {} moved, {} skipped, {} failed",
                summary.examined, summary.moved, summary.skipped, summary.failed
            );
        }
        Command::Tidy { dir, dry_run } => {
            let dir = resolve_dir(dir, &config);
            let summary = Organizer::new(normalizer, dry_run).tidy_directories(&dir)?;
            println!(
                "examined {} directories: {} renamed, {} skipped, {} failed",
                summary.examined, summary.renamed, summary.skipped, summary.failed
            );
        }
        Command::Scan { dir, dry_run } => {
            let dir = resolve_dir(dir, &config);
            let scanner = Scanner::new(normalizer, config.sidecar_name.clone(), dry_run);
            let summary = scanner.scan_library(&dir)?;
            println!(
                "{} movie directories of {} seen: {} sidecars written, {} already cached, {} failed",
                summary.movie_dirs,
                summary.directories_seen,
                summary.sidecars_written,
                summary.already_cached,
                summary.failed
            );
        }
    }

    Ok(())
}

fn resolve_dir(dir: Option<PathBuf>, config: &Config) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from(&config.media_path))
}
