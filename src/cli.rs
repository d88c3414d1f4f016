//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelsort")]
#[command(about = "Movie library organizer and filename normalizer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize raw names and print the cleaned "Title (Year)" forms
    Normalize {
        /// Raw file or directory names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Move loose media files into per-title subdirectories
    Organize {
        /// Directory holding the loose files (defaults to MEDIA_PATH)
        dir: Option<PathBuf>,

        /// Report the plan without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Rename movie directories to their normalized form
    Tidy {
        /// Directory holding the movie directories (defaults to MEDIA_PATH)
        dir: Option<PathBuf>,

        /// Report the plan without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },

    /// Walk a library tree and write metadata sidecars
    Scan {
        /// Library root (defaults to MEDIA_PATH)
        dir: Option<PathBuf>,

        /// Report the plan without touching the filesystem
        #[arg(long)]
        dry_run: bool,
    },
}
