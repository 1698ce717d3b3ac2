//! Timestamp and calendar-date helpers.
//!
//! Formats follow what browsers produce for the registration page:
//! `Date.prototype.toISOString()` for stored timestamps and the `en-GB`
//! locale string for the table of accepted registrations.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::Serializer;
use thiserror::Error;

/// Represents a stored timestamp.
pub type Timestamp = DateTime<Utc>;

/// Length of a `YYYY-MM-DD` date string.
const ISO_DATE_LEN: usize = 10;

/// Errors that can occur while parsing a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The date string is empty.
    #[error("Empty date string")]
    EmptyString,

    /// The date string is not a valid `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidFormat(String),
}

/// Returns the current UTC time.
#[must_use]
pub fn now_utc() -> Timestamp {
    Utc::now()
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use regform::utils::iso_timestamp;
///
/// let ts = Utc.with_ymd_and_hms(2025, 11, 6, 9, 5, 0).unwrap();
/// assert_eq!(iso_timestamp(&ts), "2025-11-06T09:05:00.000Z");
/// ```
#[must_use]
pub fn iso_timestamp(dt: &Timestamp) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Serde adapter writing a [`Timestamp`] with [`iso_timestamp`].
pub fn serialize_iso_timestamp<S>(dt: &Timestamp, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S%.3fZ"))
}

/// Formats an instant the way the `en-GB` locale displays it:
/// `DD/MM/YYYY, HH:MM:SS`.
#[must_use]
pub fn format_en_gb(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%d/%m/%Y, %H:%M:%S").to_string()
}

/// Parses a strict `YYYY-MM-DD` calendar date.
///
/// Only the canonical form produced by date inputs is accepted: exactly ten
/// characters, zero-padded month and day, no surrounding whitespace.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, TimestampError> {
    if input.is_empty() {
        return Err(TimestampError::EmptyString);
    }

    let canonical = input.len() == ISO_DATE_LEN
        && input.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !canonical {
        return Err(TimestampError::InvalidFormat(input.to_string()));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| TimestampError::InvalidFormat(input.to_string()))
}

/// Returns the same month and day `years` years before `date`.
///
/// When that day does not exist (29 February into a non-leap year) the date
/// rolls forward to 1 March, the way `Date.setFullYear` does.
#[must_use]
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    let year = i32::try_from(years)
        .ok()
        .and_then(|y| date.year().checked_sub(y))
        .unwrap_or(NaiveDate::MIN.year());

    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_timestamp_millis() {
        let ts = Utc.with_ymd_and_hms(2025, 11, 6, 14, 30, 0).unwrap()
            + chrono::Duration::milliseconds(789);
        assert_eq!(iso_timestamp(&ts), "2025-11-06T14:30:00.789Z");
    }

    #[test]
    fn test_format_en_gb() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(2025, 11, 6, 9, 5, 7).unwrap();
        assert_eq!(format_en_gb(&dt), "06/11/2025, 09:05:07");
    }

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(parse_calendar_date("2000-01-01").unwrap(), date(2000, 1, 1));
        assert_eq!(parse_calendar_date("2024-02-29").unwrap(), date(2024, 2, 29));
    }

    #[test]
    fn test_parse_calendar_date_rejects_loose_forms() {
        assert_eq!(parse_calendar_date(""), Err(TimestampError::EmptyString));
        for bad in [
            "2000-1-01",
            " 2000-01-01",
            "2000-01-01 ",
            "2000/01/01",
            "2023-02-29",
            "2000-13-01",
            "yesterday",
            "２０００-01-01",
        ] {
            assert!(
                matches!(parse_calendar_date(bad), Err(TimestampError::InvalidFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_years_before() {
        assert_eq!(years_before(date(2026, 10, 16), 13), date(2013, 10, 16));
        assert_eq!(years_before(date(2028, 2, 29), 13), date(2015, 3, 1));
        assert_eq!(years_before(date(2028, 2, 29), 4), date(2024, 2, 29));
    }
}
