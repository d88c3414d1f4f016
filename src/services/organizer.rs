//! Media file and directory organization
//!
//! Two batch operations over a library directory:
//! - [`Organizer::organize_files`] moves loose media files into per-title
//!   subdirectories named by the normalizer.
//! - [`Organizer::tidy_directories`] renames movie directories to their
//!   normalized "Title (Year)" form.
//!
//! Both tolerate per-item failures: a file that cannot be moved is logged and
//! counted, the rest of the batch continues.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::file_utils::{is_media_file, sanitize_for_filename};
use super::normalizer::Normalizer;

/// Outcome of an [`Organizer::organize_files`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OrganizeSummary {
    pub examined: usize,
    pub moved: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Outcome of an [`Organizer::tidy_directories`] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TidySummary {
    pub examined: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Batch organizer built around a [`Normalizer`].
pub struct Organizer {
    normalizer: Normalizer,
    dry_run: bool,
}

impl Organizer {
    pub fn new(normalizer: Normalizer, dry_run: bool) -> Self {
        Self { normalizer, dry_run }
    }

    /// Move each loose media file directly under `dir` into a subdirectory
    /// named after its normalized title.
    pub fn organize_files(&self, dir: &Path) -> Result<OrganizeSummary> {
        let mut summary = OrganizeSummary::default();

        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    summary.failed += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || !is_media_file(&path) {
                continue;
            }
            summary.examined += 1;

            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => {
                    warn!(path = %path.display(), "File has no usable name");
                    summary.skipped += 1;
                    continue;
                }
            };

            let title = sanitize_for_filename(&self.normalizer.normalize(stem));
            if title.trim().is_empty() {
                warn!(path = %path.display(), "Normalization left nothing of the name");
                summary.skipped += 1;
                continue;
            }

            let target_dir = dir.join(title.trim());
            let file_name = entry.file_name();
            let target = target_dir.join(&file_name);

            if target.exists() {
                warn!(target = %target.display(), "Target already exists, leaving file in place");
                summary.skipped += 1;
                continue;
            }

            if self.dry_run {
                info!(
                    from = %path.display(),
                    to = %target.display(),
                    "Dry run: would move file"
                );
                summary.moved += 1;
                continue;
            }

            let result = fs::create_dir_all(&target_dir)
                .and_then(|_| move_file(&path, &target));

            match result {
                Ok(()) => {
                    info!(from = %path.display(), to = %target.display(), "Moved file");
                    summary.moved += 1;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to move file");
                    summary.failed += 1;
                }
            }
        }

        info!(
            examined = summary.examined,
            moved = summary.moved,
            skipped = summary.skipped,
            failed = summary.failed,
            dry_run = self.dry_run,
            "Organize pass complete"
        );
        Ok(summary)
    }

    /// Rename each subdirectory of `dir` to its normalized form.
    ///
    /// Directories whose name starts with `_` are a user opt-out and are
    /// never touched. An existing target is reported as a conflict and the
    /// source is left in place.
    pub fn tidy_directories(&self, dir: &Path) -> Result<TidySummary> {
        let mut summary = TidySummary::default();

        let entries = fs::read_dir(dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable directory entry");
                    summary.failed += 1;
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            if name.starts_with('_') {
                debug!(dir = %path.display(), "Opt-out marker, leaving directory alone");
                continue;
            }
            summary.examined += 1;

            let cleaned = sanitize_for_filename(&self.normalizer.normalize(&name));
            let cleaned = cleaned.trim();
            if cleaned.is_empty() || cleaned == name {
                summary.skipped += 1;
                continue;
            }

            let target = dir.join(cleaned);
            if target.exists() {
                warn!(
                    from = %path.display(),
                    to = %target.display(),
                    "Rename target already exists, leaving directory in place"
                );
                summary.skipped += 1;
                continue;
            }

            if self.dry_run {
                info!(
                    from = %path.display(),
                    to = %target.display(),
                    "Dry run: would rename directory"
                );
                summary.renamed += 1;
                continue;
            }

            match fs::rename(&path, &target) {
                Ok(()) => {
                    info!(from = %path.display(), to = %target.display(), "Renamed directory");
                    summary.renamed += 1;
                }
                Err(e) => {
                    warn!(dir = %path.display(), error = %e, "Failed to rename directory");
                    summary.failed += 1;
                }
            }
        }

        info!(
            examined = summary.examined,
            renamed = summary.renamed,
            skipped = summary.skipped,
            failed = summary.failed,
            dry_run = self.dry_run,
            "Tidy pass complete"
        );
        Ok(summary)
    }
}

/// Move a file, falling back to copy + delete across filesystems.
fn move_file(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
    }
}
