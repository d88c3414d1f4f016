//! Library services

pub mod file_utils;
pub mod media_db;
pub mod normalizer;
pub mod organizer;
pub mod scanner;

pub use media_db::{MediaDbError, MediaRecord, DEFAULT_SIDECAR_NAME, SCHEMA_VERSION};
pub use normalizer::{Normalizer, DEFAULT_NOISE_TOKENS, FIRST_YEAR};
pub use organizer::{Organizer, OrganizeSummary, TidySummary};
pub use scanner::{ScanSummary, Scanner};
