//! Test fixtures for registration validation.

use std::sync::Arc;

use chrono::{FixedOffset, TimeZone};

use crate::clock::{Clock, FixedClock};
use crate::core::RegistrationInput;
use crate::validation::FormValidator;

/// Builder for registration inputs that start out valid.
///
/// Tests override only the field they exercise, so every other field is
/// known to pass.
#[derive(Debug, Clone)]
pub struct InputFixture {
    input: RegistrationInput,
}

impl InputFixture {
    /// Creates a fixture that passes every rule for any "today" after 2013.
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: RegistrationInput::new(
                "Jane Doe",
                "jane@example.com",
                "+358 40 1234567",
                "2000-01-01",
                true,
            ),
        }
    }

    /// Sets the full name.
    #[must_use]
    pub fn with_full_name(mut self, value: impl Into<String>) -> Self {
        self.input.full_name = value.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.input.email = value.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.input.phone = value.into();
        self
    }

    /// Sets the birth date.
    #[must_use]
    pub fn with_birth_date(mut self, value: impl Into<String>) -> Self {
        self.input.birth_date = value.into();
        self
    }

    /// Sets the terms checkbox.
    #[must_use]
    pub const fn with_terms(mut self, accepted: bool) -> Self {
        self.input.terms_accepted = accepted;
        self
    }

    /// Returns the built input.
    #[must_use]
    pub fn build(self) -> RegistrationInput {
        self.input
    }
}

impl Default for InputFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A clock frozen at noon UTC on the given date.
///
/// # Panics
///
/// Panics if the date does not exist.
#[must_use]
pub fn fixed_clock(year: i32, month: u32, day: u32) -> Arc<dyn Clock> {
    let instant = FixedOffset::east_opt(0)
        .and_then(|utc| utc.with_ymd_and_hms(year, month, day, 12, 0, 0).single())
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"));
    Arc::new(FixedClock::new(instant))
}

/// A default validator whose "today" is the given date.
#[must_use]
pub fn validator_on(year: i32, month: u32, day: u32) -> FormValidator {
    FormValidator::new().with_clock(fixed_clock(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_fixture_defaults() {
        let input = InputFixture::new().build();
        assert_eq!(input.full_name, "Jane Doe");
        assert!(input.terms_accepted);
    }

    #[test]
    fn test_input_fixture_overrides() {
        let input = InputFixture::new()
            .with_email("x@y.fi")
            .with_terms(false)
            .build();
        assert_eq!(input.email, "x@y.fi");
        assert!(!input.terms_accepted);
        assert_eq!(input.phone, "+358 40 1234567");
    }

    #[test]
    fn test_fixed_clock_date() {
        let clock = fixed_clock(2026, 10, 16);
        assert_eq!(clock.now().to_rfc3339(), "2026-10-16T12:00:00+00:00");
    }

    #[test]
    fn test_validator_on_accepts_fixture() {
        assert!(validator_on(2026, 10, 16).validate(&InputFixture::new().build()).is_valid());
    }
}
