//! reelsort - movie library organizer
//!
//! Core is a pure filename normalizer that turns scene-style release names
//! into clean "Title (Year)" strings; around it sit batch operations that
//! organize loose media files, tidy directory names, and maintain JSON
//! metadata sidecars across a library tree.

pub mod config;
pub mod services;

pub use config::Config;
pub use services::{MediaRecord, Normalizer, Organizer, Scanner};
