//! Per-directory metadata sidecar
//!
//! Each movie directory carries a small JSON file (`mediaInfo.db` by default)
//! describing the title the scanner derived for it. The sidecar doubles as a
//! "already scanned" marker: directories that have one are skipped on later
//! scans. Single-writer, no locking.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use super::normalizer::Normalizer;

/// Current sidecar schema version.
pub const SCHEMA_VERSION: &str = "1.0";

/// Default sidecar filename.
pub const DEFAULT_SIDECAR_NAME: &str = "mediaInfo.db";

/// Errors from loading or storing a sidecar.
#[derive(Debug, Error)]
pub enum MediaDbError {
    #[error("no sidecar found at {0}")]
    NotFound(PathBuf),

    #[error("failed to access sidecar at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed sidecar at {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported sidecar schema {found} (expected {expected})")]
    SchemaMismatch { found: String, expected: String },
}

/// Metadata record persisted as the directory sidecar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    pub schema: String,
    /// Normalized "Title (Year)" name
    pub name: String,
    pub year: Option<i32>,
    /// Directory the record describes
    pub path: String,
    pub languages: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub hidden_tags: Vec<String>,
    /// Media filenames found directly in the directory
    #[serde(default)]
    pub media_files: Vec<String>,
    pub scanned_at: Option<String>,
}

impl MediaRecord {
    /// Build a record for a movie directory from its name and media contents.
    ///
    /// Language and tag heuristics come from the directory path: a
    /// "bollywood" component tags the movie Bollywood and implies Hindi,
    /// otherwise English is assumed; "hindi" or "dual" anywhere adds Hindi.
    pub fn from_directory(dir: &Path, media_files: Vec<String>, normalizer: &Normalizer) -> Self {
        let basename = dir
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let lower_path = dir.to_string_lossy().to_lowercase();

        let mut languages = Vec::new();
        let mut tags = Vec::new();

        if lower_path.contains("bollywood") {
            tags.push("Bollywood".to_string());
            languages.push("Hindi".to_string());
        } else {
            languages.push("English".to_string());
        }

        if (lower_path.contains("hindi") || lower_path.contains("dual"))
            && !languages.iter().any(|l| l == "Hindi")
        {
            languages.push("Hindi".to_string());
        }

        Self {
            schema: SCHEMA_VERSION.to_string(),
            name: normalizer.normalize(&basename),
            year: normalizer.detect_year(&basename),
            path: dir.to_string_lossy().to_string(),
            languages,
            tags,
            hidden_tags: Vec::new(),
            media_files,
            scanned_at: OffsetDateTime::now_utc().format(&Rfc3339).ok(),
        }
    }

    /// Load a record from a sidecar file, validating the schema version.
    pub fn load(path: &Path) -> Result<Self, MediaDbError> {
        if !path.is_file() {
            return Err(MediaDbError::NotFound(path.to_path_buf()));
        }

        let data = fs::read_to_string(path).map_err(|source| MediaDbError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let record: MediaRecord =
            serde_json::from_str(&data).map_err(|source| MediaDbError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        if record.schema != SCHEMA_VERSION {
            return Err(MediaDbError::SchemaMismatch {
                found: record.schema,
                expected: SCHEMA_VERSION.to_string(),
            });
        }

        Ok(record)
    }

    /// Write the record as pretty-printed JSON to the given sidecar path.
    pub fn store(&self, path: &Path) -> Result<(), MediaDbError> {
        let data = serde_json::to_string_pretty(self).map_err(|source| MediaDbError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, data).map_err(|source| MediaDbError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
