//! Date formatting for certificate and timeline entries
//!
//! English month names, no time zone: a content date is a calendar date and
//! renders the same everywhere.

use chrono::NaiveDate;

/// Label used for the end of a role that is still ongoing
pub const PRESENT: &str = "Present";

/// "March 5, 2023"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Mar 2022"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// "Mar 2022 - Jun 2023", or "Mar 2022 - Present" for a current role.
///
/// A missing end date on a role that is not flagged current also reads as
/// "Present".
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>, current: bool) -> String {
    let end = match end {
        Some(end) if !current => format_month_year(end),
        _ => PRESENT.to_string(),
    };
    format!("{} - {}", format_month_year(start), end)
}
