//! The registration form validator.

use super::rules::{check_birth_date, check_email, check_full_name, check_phone, check_terms};
use crate::clock::{Clock, SystemClock};
use crate::config::ValidatorConfig;
use crate::core::{FieldErrors, RegistrationInput, RegistrationRecord, ValidationResult};
use crate::errors::{ConfigError, FieldValidationError};
use crate::utils::generate_uuid_v7;
use chrono::{DateTime, FixedOffset, Utc};
use std::sync::Arc;
use tracing::debug;

/// Validates registration submissions.
///
/// Every rule runs on every call, so a rejected result lists all failing
/// fields at once. The validator holds no mutable state; the only outside
/// input is its clock.
///
/// # Examples
///
/// ```
/// use regform::prelude::*;
///
/// let validator = FormValidator::new();
/// let input = RegistrationInput::new("John", "abc", "", "", false);
/// let result = validator.validate(&input);
///
/// assert!(!result.is_valid());
/// assert_eq!(
///     result.message(Field::FullName).as_deref(),
///     Some("Please enter both first and last name.")
/// );
/// ```
#[derive(Clone)]
pub struct FormValidator {
    config: ValidatorConfig,
    clock: Arc<dyn Clock>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FormValidator {
    /// Creates a validator with the default rules and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Creates a validator from a configuration, checking it first.
    pub fn from_config(config: ValidatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            clock: Arc::new(SystemClock),
        })
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The clock used for "today" and submission timestamps.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Validates a submission against the validator's clock.
    #[must_use]
    pub fn validate(&self, input: &RegistrationInput) -> ValidationResult {
        self.validate_at(input, self.clock.now())
    }

    /// Validates a submission as if it were made at `now`.
    ///
    /// "Today" is the calendar date of `now` in its own offset.
    #[must_use]
    pub fn validate_at(
        &self,
        input: &RegistrationInput,
        now: DateTime<FixedOffset>,
    ) -> ValidationResult {
        let today = now.date_naive();
        let mut errors = FieldErrors::new();

        let full_name = collect(
            &mut errors,
            check_full_name(
                &input.full_name,
                self.config.min_name_parts,
                self.config.min_name_part_len,
            ),
        );
        let email = collect(&mut errors, check_email(&input.email));
        let phone = collect(&mut errors, check_phone(&input.phone));
        let birth_date = collect(
            &mut errors,
            check_birth_date(&input.birth_date, today, self.config.minimum_age),
        );
        let terms = collect(&mut errors, check_terms(input.terms_accepted));

        match (full_name, email, phone, birth_date, terms) {
            (Some(full_name), Some(email), Some(phone), Some(_), Some(())) => {
                let record = RegistrationRecord::new(
                    generate_uuid_v7(),
                    full_name,
                    email,
                    phone,
                    input.birth_date.clone(),
                    now.with_timezone(&Utc),
                );
                debug!(registration_id = %record.id(), "Registration accepted");
                ValidationResult::accepted(record)
            }
            _ => {
                debug!(
                    failed_fields = ?errors.keys().collect::<Vec<_>>(),
                    "Registration rejected"
                );
                ValidationResult::rejected(errors)
            }
        }
    }
}

fn collect<T>(errors: &mut FieldErrors, outcome: Result<T, FieldValidationError>) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(error) => {
            errors.insert(error.field(), error);
            None
        }
    }
}
