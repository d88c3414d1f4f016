//! Integration tests for the organize pipeline
//!
//! These tests exercise the filesystem-facing operations end to end against
//! temporary directories:
//! - organizing loose media files into per-title directories
//! - tidying directory names into normalized form
//! - scanning a library tree and writing metadata sidecars

use std::fs;
use std::path::Path;

use reelsort::services::media_db::{MediaRecord, DEFAULT_SIDECAR_NAME};
use reelsort::services::{Normalizer, Organizer, Scanner};

fn touch(path: &Path) {
    fs::write(path, b"stub").unwrap();
}

// ============================================================================
// organize_files
// ============================================================================

#[test]
fn organize_moves_media_into_title_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("Inception.2010.1080p.BluRay.x264-YIFY.mkv"));
    touch(&root.join("notes.txt"));

    let summary = Organizer::new(Normalizer::default(), false)
        .organize_files(root)
        .unwrap();

    assert_eq!(summary.examined, 1);
    assert_eq!(summary.moved, 1);
    assert_eq!(summary.failed, 0);

    let moved = root
        .join("Inception (2010)")
        .join("Inception.2010.1080p.BluRay.x264-YIFY.mkv");
    assert!(moved.is_file(), "file not moved to {}", moved.display());
    assert!(!root.join("Inception.2010.1080p.BluRay.x264-YIFY.mkv").exists());
    // Non-media files are left where they are.
    assert!(root.join("notes.txt").is_file());
}

#[test]
fn organize_dry_run_leaves_tree_untouched() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("The.Matrix.1999.DVDRip.XviD.mp4"));

    let summary = Organizer::new(Normalizer::default(), true)
        .organize_files(root)
        .unwrap();

    assert_eq!(summary.moved, 1);
    assert!(root.join("The.Matrix.1999.DVDRip.XviD.mp4").is_file());
    assert!(!root.join("The Matrix (1999)").exists());
}

#[test]
fn organize_skips_when_target_exists() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("Heat.1995.BluRay.avi"));
    let occupied = root.join("Heat (1995)");
    fs::create_dir(&occupied).unwrap();
    touch(&occupied.join("Heat.1995.BluRay.avi"));

    let summary = Organizer::new(Normalizer::default(), false)
        .organize_files(root)
        .unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.moved, 0);
    assert!(root.join("Heat.1995.BluRay.avi").is_file());
}

// ============================================================================
// tidy_directories
// ============================================================================

#[test]
fn tidy_renames_directory_to_normalized_form() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("The.Matrix.1999.DVDRip.XviD")).unwrap();

    let summary = Organizer::new(Normalizer::default(), false)
        .tidy_directories(root)
        .unwrap();

    assert_eq!(summary.renamed, 1);
    assert_eq!(summary.failed, 0);
    assert!(root.join("The Matrix (1999)").is_dir());
    assert!(!root.join("The.Matrix.1999.DVDRip.XviD").exists());
}

#[test]
fn tidy_ignores_optout_and_clean_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("_keep.me.as.is")).unwrap();
    fs::create_dir(root.join("Random Home Video")).unwrap();

    let summary = Organizer::new(Normalizer::default(), false)
        .tidy_directories(root)
        .unwrap();

    assert_eq!(summary.renamed, 0);
    assert!(root.join("_keep.me.as.is").is_dir());
    assert!(root.join("Random Home Video").is_dir());
}

#[test]
fn tidy_reports_conflict_and_keeps_source() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("Heat.1995.DVDRip")).unwrap();
    fs::create_dir(root.join("Heat (1995)")).unwrap();

    let summary = Organizer::new(Normalizer::default(), false)
        .tidy_directories(root)
        .unwrap();

    assert_eq!(summary.renamed, 0);
    assert_eq!(summary.failed, 0);
    assert!(root.join("Heat.1995.DVDRip").is_dir());
    assert!(root.join("Heat (1995)").is_dir());
}

#[test]
fn tidy_is_stable_across_repeated_runs() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("Inception.2010.720p.BRRip")).unwrap();

    let organizer = Organizer::new(Normalizer::default(), false);
    organizer.tidy_directories(root).unwrap();
    assert!(root.join("Inception (2010)").is_dir());

    // A second pass finds nothing to do.
    let summary = organizer.tidy_directories(root).unwrap();
    assert_eq!(summary.renamed, 0);
    assert!(root.join("Inception (2010)").is_dir());
}

// ============================================================================
// scan_library
// ============================================================================

#[test]
fn scan_writes_sidecars_for_movie_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let movie = root.join("Heat.1995");
    fs::create_dir(&movie).unwrap();
    touch(&movie.join("heat.mkv"));
    touch(&movie.join("heat.srt"));
    fs::create_dir(root.join("empty-folder")).unwrap();

    let scanner = Scanner::new(Normalizer::default(), DEFAULT_SIDECAR_NAME.to_string(), false);
    let summary = scanner.scan_library(root).unwrap();

    assert_eq!(summary.movie_dirs, 1);
    assert_eq!(summary.sidecars_written, 1);
    assert_eq!(summary.failed, 0);

    let record = MediaRecord::load(&movie.join(DEFAULT_SIDECAR_NAME)).unwrap();
    assert_eq!(record.name, "Heat (1995)");
    assert_eq!(record.year, Some(1995));
    assert_eq!(record.media_files, vec!["heat.mkv"]);
    assert_eq!(record.languages, vec!["English"]);
    assert!(record.scanned_at.is_some());

    // Empty directories get no sidecar.
    assert!(!root.join("empty-folder").join(DEFAULT_SIDECAR_NAME).exists());
}

#[test]
fn scan_skips_directories_with_existing_sidecar() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let movie = root.join("Lagaan.2001.DVDRip");
    fs::create_dir(&movie).unwrap();
    touch(&movie.join("lagaan.mp4"));

    let scanner = Scanner::new(Normalizer::default(), DEFAULT_SIDECAR_NAME.to_string(), false);
    scanner.scan_library(root).unwrap();

    let sidecar = movie.join(DEFAULT_SIDECAR_NAME);
    let first_contents = fs::read_to_string(&sidecar).unwrap();

    let summary = scanner.scan_library(root).unwrap();
    assert_eq!(summary.already_cached, 1);
    assert_eq!(summary.sidecars_written, 0);
    assert_eq!(fs::read_to_string(&sidecar).unwrap(), first_contents);
}

#[test]
fn scan_dry_run_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    let movie = root.join("Casablanca.1942");
    fs::create_dir(&movie).unwrap();
    touch(&movie.join("casablanca.avi"));

    let scanner = Scanner::new(Normalizer::default(), DEFAULT_SIDECAR_NAME.to_string(), true);
    let summary = scanner.scan_library(root).unwrap();

    assert_eq!(summary.sidecars_written, 1);
    assert!(!movie.join(DEFAULT_SIDECAR_NAME).exists());
}

#[test]
fn scan_rejects_missing_root() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nowhere");

    let scanner = Scanner::new(Normalizer::default(), DEFAULT_SIDECAR_NAME.to_string(), false);
    assert!(scanner.scan_library(&missing).is_err());
}
