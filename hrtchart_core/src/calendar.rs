//! Calendar row generation for the 28-day cycle.

use crate::dosage::{lookup, DosageVariant};
use crate::types::{CalendarRow, HORMONES};
use chrono::{Days, NaiveDate};

/// Number of days in one cycle.
pub const SCHEDULE_DAYS: u32 = 28;

/// Generate the full cycle of calendar rows starting at `start_date`.
///
/// Rows come back in ascending day order 1..=28; exporters rely on that
/// order when mapping day N onto sheet/table row N+1 (after the header).
/// This is pure and total over the 28-day domain: every row gets the
/// constant hormone triple, a non-empty dosage text, and empty notes.
pub fn generate(start_date: NaiveDate, variant: DosageVariant) -> Vec<CalendarRow> {
    (1..=SCHEDULE_DAYS)
        .map(|day| CalendarRow {
            day,
            date: start_date
                .checked_add_days(Days::new(u64::from(day - 1)))
                .unwrap_or(start_date),
            hormones: HORMONES,
            dosage_text: lookup(day, variant),
            notes: String::new(),
        })
        .collect()
}
