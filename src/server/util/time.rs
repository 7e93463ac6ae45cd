//! Calendar week calculations and stored date conversion.
//!
//! Dates are stored as `YYYY-MM-DD` text so that lexical order matches chronological order,
//! which lets repositories filter and sort on the raw column.

use chrono::{Datelike, Days, NaiveDate};

use crate::server::error::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current date in the server's local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Returns the Monday on or before `date`.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());

    date - Days::new(offset)
}

/// Mondays of every week overlapping `start..=end`.
///
/// The first entry is the Monday of `start`'s week, so a range starting mid-week still
/// produces that week. Returns an empty vec when `start > end`.
pub fn week_mondays(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut weeks = Vec::new();
    if start > end {
        return weeks;
    }

    let mut monday = monday_of(start);
    while monday <= end {
        weeks.push(monday);
        monday = monday + Days::new(7);
    }

    weeks
}

/// Format a date the way it is stored in the database.
pub fn to_db_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn from_db_date(value: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| Error::ParseError(format!("Invalid stored date {:?}: {}", value, e)))
}
