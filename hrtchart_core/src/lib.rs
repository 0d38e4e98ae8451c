#![forbid(unsafe_code)]

//! Core domain model and export logic for the HRT Chart system.
//!
//! This crate provides:
//! - Domain types (hormones, calendar rows)
//! - The 28-day dosage table and its two text renderings
//! - Calendar row generation
//! - Spreadsheet and document exporters
//! - SMTP delivery of the generated document

pub mod types;
pub mod error;
pub mod dosage;
pub mod calendar;
pub mod config;
pub mod logging;
pub mod sheet;
pub mod doc;
pub mod mail;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use dosage::{lookup, DosageVariant};
pub use calendar::{generate, SCHEDULE_DAYS};
pub use config::Config;
pub use sheet::write_schedule_sheet;
pub use doc::write_schedule_doc;
pub use mail::send_document;
