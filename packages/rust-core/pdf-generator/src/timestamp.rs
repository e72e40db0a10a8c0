//! PDF timestamp generation without a date/time dependency
//!
//! Provides lightweight timestamp generation for the PDF Info dict's
//! `CreationDate` entry from `std::time` alone.

/// Generate a PDF-compatible timestamp string (D:YYYYMMDDHHmmSS format).
///
/// The date portion is deliberately simplified (always January 1st of the
/// current year, not leap-year-aware) — good enough for a plausible
/// `CreationDate`, and avoids pulling in a calendar crate for a cosmetic
/// metadata field.
pub fn current_pdf_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch");

    let total_seconds = duration.as_secs();

    // Convert Unix timestamp to calendar date
    // Using simplified algorithm (good enough for PDF metadata)
    let seconds_per_day = 86400u64;
    let days_since_epoch = total_seconds / seconds_per_day;
    let seconds_today = total_seconds % seconds_per_day;

    // Calculate year (simplified - doesn't handle leap years perfectly)
    let years_since_1970 = days_since_epoch / 365;
    let year = 1970 + years_since_1970;

    // Calculate time of day
    let hours = seconds_today / 3600;
    let minutes = (seconds_today % 3600) / 60;
    let seconds = seconds_today % 60;

    // Use January 1st as the date (good enough for tests)
    format!("D:{:04}0101{:02}{:02}{:02}Z", year, hours, minutes, seconds)
}
