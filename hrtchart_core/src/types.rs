//! Core domain types for the HRT Chart system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Hormones and their display colors
//! - Calendar rows (one per day of the 28-day cycle)

use chrono::NaiveDate;

/// A hormone tracked on the calendar, with the RGB color its name is
/// rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hormone {
    pub name: &'static str,
    pub color: u32,
}

/// The fixed hormone triple shown in every calendar row, in display order.
pub const HORMONES: [Hormone; 3] = [
    Hormone {
        name: "Estrogen",
        color: 0x008000, // green
    },
    Hormone {
        name: "Progesterone",
        color: 0xFFA500, // orange
    },
    Hormone {
        name: "Testosterone",
        color: 0xA020F0, // purple
    },
];

/// One day's worth of calendar data.
///
/// Rows are created once per day during an export and are never persisted;
/// their lifetime is the single export call.
#[derive(Clone, Debug)]
pub struct CalendarRow {
    /// Day of cycle, 1..=28
    pub day: u32,
    /// Calendar date for this day
    pub date: NaiveDate,
    /// Always the full [`HORMONES`] triple, in order
    pub hormones: [Hormone; 3],
    /// Dosage text for this day, already rendered for the target format
    pub dosage_text: String,
    /// Free-text field left empty for the user to fill in later
    pub notes: String,
}
