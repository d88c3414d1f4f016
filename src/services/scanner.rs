//! Library scanner
//!
//! Walks a library tree, treats any directory that directly contains media
//! files as a movie directory, and writes a metadata sidecar into each one
//! that does not have one yet. Existing sidecars are the skip marker, so
//! re-scans are cheap and never clobber earlier records.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::file_utils::is_media_file;
use super::media_db::MediaRecord;
use super::normalizer::Normalizer;

/// Outcome of a [`Scanner::scan_library`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub directories_seen: usize,
    pub movie_dirs: usize,
    pub sidecars_written: usize,
    pub already_cached: usize,
    pub failed: usize,
}

/// Walks a library root and maintains per-directory sidecars.
pub struct Scanner {
    normalizer: Normalizer,
    sidecar_name: String,
    dry_run: bool,
}

impl Scanner {
    pub fn new(normalizer: Normalizer, sidecar_name: String, dry_run: bool) -> Self {
        Self { normalizer, sidecar_name, dry_run }
    }

    /// Scan the library rooted at `root`.
    pub fn scan_library(&self, root: &Path) -> Result<ScanSummary> {
        if !root.is_dir() {
            anyhow::bail!("library root {} is not a directory", root.display());
        }

        info!(root = %root.display(), dry_run = self.dry_run, "Starting library scan");
        let mut summary = ScanSummary::default();

        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_dir() {
                continue;
            }
            let dir = entry.path();
            summary.directories_seen += 1;

            let media_files = match self.list_media_files(dir) {
                Ok(files) => files,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Failed to list directory");
                    summary.failed += 1;
                    continue;
                }
            };

            if media_files.is_empty() {
                debug!(dir = %dir.display(), "No media files, not a movie directory");
                continue;
            }
            summary.movie_dirs += 1;

            let sidecar = dir.join(&self.sidecar_name);
            if sidecar.exists() {
                debug!(dir = %dir.display(), "Sidecar present, skipping");
                summary.already_cached += 1;
                continue;
            }

            let record = MediaRecord::from_directory(dir, media_files, &self.normalizer);

            if self.dry_run {
                info!(
                    dir = %dir.display(),
                    name = %record.name,
                    "Dry run: would write sidecar"
                );
                summary.sidecars_written += 1;
                continue;
            }

            match record.store(&sidecar) {
                Ok(()) => {
                    info!(
                        dir = %dir.display(),
                        name = %record.name,
                        year = ?record.year,
                        "Wrote sidecar"
                    );
                    summary.sidecars_written += 1;
                }
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "Failed to write sidecar");
                    summary.failed += 1;
                }
            }
        }

        info!(
            directories = summary.directories_seen,
            movie_dirs = summary.movie_dirs,
            written = summary.sidecars_written,
            cached = summary.already_cached,
            failed = summary.failed,
            "Library scan complete"
        );
        Ok(summary)
    }

    /// Names of media files directly inside `dir` (no recursion).
    fn list_media_files(&self, dir: &Path) -> Result<Vec<String>> {
        let mut files = Vec::new();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && is_media_file(&path) {
                files.push(entry.file_name().to_string_lossy().to_string());
            }
        }

        files.sort();
        Ok(files)
    }
}
