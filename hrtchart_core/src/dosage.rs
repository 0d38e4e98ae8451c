//! The 28-day dosage table.
//!
//! One canonical table maps day-of-cycle ranges to a numeric dosage triple
//! (estrogen, progesterone, testosterone). The two textual encodings the
//! exporters need are pure formatters over that single table, so they can
//! never drift apart.

/// Which textual rendering of a dosage to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DosageVariant {
    /// Plain newline-separated amounts, for spreadsheet cells
    Sheet,
    /// Each amount line indented with two spaces, matching the hormone
    /// name indentation inside document table cells
    Document,
}

/// Daily amounts for the hormone triple, in [`crate::HORMONES`] order.
///
/// Progesterone is absent during the first half of the cycle; an absent
/// amount renders as a blank line so the triple stays aligned with the
/// hormone names next to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DosageAmounts {
    pub estrogen: u32,
    pub progesterone: Option<u32>,
    pub testosterone: u32,
}

/// An inclusive day range `[start, end]` with its dosage amounts.
#[derive(Clone, Copy, Debug)]
struct DosageRange {
    start: u32,
    end: u32,
    amounts: DosageAmounts,
}

const fn amounts(estrogen: u32, progesterone: Option<u32>, testosterone: u32) -> DosageAmounts {
    DosageAmounts {
        estrogen,
        progesterone,
        testosterone,
    }
}

/// The complete schedule: ascending, non-overlapping ranges covering
/// days 1..=28 exactly.
const DOSAGE_RANGES: [DosageRange; 16] = [
    DosageRange { start: 1, end: 5, amounts: amounts(6, None, 1) },
    DosageRange { start: 6, end: 8, amounts: amounts(8, None, 1) },
    DosageRange { start: 9, end: 11, amounts: amounts(9, None, 1) },
    DosageRange { start: 12, end: 12, amounts: amounts(10, None, 1) },
    DosageRange { start: 13, end: 13, amounts: amounts(4, None, 2) },
    DosageRange { start: 14, end: 14, amounts: amounts(4, Some(6), 3) },
    DosageRange { start: 15, end: 15, amounts: amounts(5, Some(6), 4) },
    DosageRange { start: 16, end: 16, amounts: amounts(5, Some(10), 3) },
    DosageRange { start: 17, end: 17, amounts: amounts(5, Some(10), 2) },
    DosageRange { start: 18, end: 19, amounts: amounts(6, Some(12), 1) },
    DosageRange { start: 20, end: 20, amounts: amounts(6, Some(14), 1) },
    DosageRange { start: 21, end: 21, amounts: amounts(6, Some(16), 1) },
    DosageRange { start: 22, end: 22, amounts: amounts(6, Some(14), 1) },
    DosageRange { start: 23, end: 24, amounts: amounts(6, Some(12), 1) },
    DosageRange { start: 25, end: 26, amounts: amounts(6, Some(10), 1) },
    DosageRange { start: 27, end: 28, amounts: amounts(6, Some(6), 1) },
];

/// Canonical lookup shared by both formatters.
///
/// Returns `None` for any day outside 1..=28.
pub fn amounts_for(day: u32) -> Option<&'static DosageAmounts> {
    DOSAGE_RANGES
        .iter()
        .find(|r| day >= r.start && day <= r.end)
        .map(|r| &r.amounts)
}

/// Look up the dosage text for a day in the requested rendering.
///
/// Returns an empty string when no range matches (day outside 1..=28).
/// Absence is signaled by the empty string, not an error; callers use
/// "empty ⇒ skip styling" when writing cells.
pub fn lookup(day: u32, variant: DosageVariant) -> String {
    match amounts_for(day) {
        Some(a) => match variant {
            DosageVariant::Sheet => format_for_sheet(a),
            DosageVariant::Document => format_for_document(a),
        },
        None => String::new(),
    }
}

/// Plain rendering: one amount per line, blank line for an absent amount.
fn format_for_sheet(a: &DosageAmounts) -> String {
    match a.progesterone {
        Some(p) => format!("{}\n{}\n{}", a.estrogen, p, a.testosterone),
        None => format!("{}\n\n{}", a.estrogen, a.testosterone),
    }
}

/// Document rendering: same lines, each non-empty line prefixed with two
/// spaces so the amounts line up with the indented hormone names in the
/// neighboring table cell.
fn format_for_document(a: &DosageAmounts) -> String {
    match a.progesterone {
        Some(p) => format!(
            "\u{20}\u{20}{}\n\u{20}\u{20}{}\n\u{20}\u{20}{}",
            a.estrogen, p, a.testosterone
        ),
        None => format!("\u{20}\u{20}{}\n\n\u{20}\u{20}{}", a.estrogen, a.testosterone),
    }
}
