// File: ./src/model/dates.rs
//! Flexible calendar-date parsing shared by Deadline and Event construction.

use chrono::NaiveDate;

/// Accepted input formats, tried in order. First successful match wins,
/// so `2025-03-04` always reads as ISO even though days <= 12 would also fit
/// the slash/dash patterns with swapped fields.
const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Human-facing format used in rendered task lines, e.g. `Dec 31 2025`.
const DISPLAY_FORMAT: &str = "%b %d %Y";

/// Tries each accepted format against `input` (trimmed) and returns the
/// first calendar-valid hit, or None if nothing matches.
pub fn parse_flexible(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

pub fn format_human(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
