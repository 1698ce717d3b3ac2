//! Date bounds for the rental order form.
//!
//! The start and end date inputs of the order form only offer days from
//! today onwards. "Today" here is the UTC calendar date, which is what the
//! order page writes into the inputs' `min` attribute.

use crate::clock::Clock;
use crate::errors::RentalDateError;
use crate::utils::{parse_calendar_date, TimestampError};
use chrono::{NaiveDate, Utc};

/// The earliest selectable rental date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalDateBounds {
    earliest: NaiveDate,
}

impl RentalDateBounds {
    /// Bounds starting at the given day.
    #[must_use]
    pub const fn starting(earliest: NaiveDate) -> Self {
        Self { earliest }
    }

    /// Bounds starting at today's UTC date according to `clock`.
    #[must_use]
    pub fn today(clock: &dyn Clock) -> Self {
        Self::starting(clock.now().with_timezone(&Utc).date_naive())
    }

    /// The earliest selectable day.
    #[must_use]
    pub const fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// The earliest selectable day as `YYYY-MM-DD`, for a date input's `min`.
    #[must_use]
    pub fn earliest_iso(&self) -> String {
        self.earliest.format("%Y-%m-%d").to_string()
    }

    /// Parses a rental start or end date and checks it against the bounds.
    pub fn check(&self, value: &str) -> Result<NaiveDate, RentalDateError> {
        let date = parse_calendar_date(value).map_err(|e| match e {
            TimestampError::EmptyString => RentalDateError::Required,
            TimestampError::InvalidFormat(raw) => RentalDateError::Invalid(raw),
        })?;

        if date < self.earliest {
            return Err(RentalDateError::BeforeEarliest {
                earliest: self.earliest_iso(),
            });
        }
        Ok(date)
    }
}
