//! Core library for GeoNote.
//!
//! This crate holds the two pieces of GeoNote that are more than glue code:
//! - `coords` converts coordinates between decimal degrees and DMS notation
//! - `calendar` turns a meeting into calendar deep links and an .ics payload

pub mod calendar;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;

pub use error::{GeoNoteError, GeoNoteResult};
