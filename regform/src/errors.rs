//! Error types for regform.
//!
//! Field validation failures are ordinary data carried inside a
//! [`ValidationResult`](crate::core::ValidationResult). The remaining types
//! cover operational failures such as loading configuration.

use crate::core::Field;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A validation failure scoped to a single form field.
///
/// The `Display` output of each variant is the exact message shown next to
/// the field on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldValidationError {
    /// The full name is empty after trimming.
    #[error("Full name is required.")]
    FullNameRequired,

    /// The full name has fewer parts than required.
    #[error("Please enter both first and last name.")]
    FullNameIncomplete,

    /// A part of the full name is too short.
    #[error("Each name must be at least {min} characters long.")]
    NamePartTooShort {
        /// Minimum number of characters per name part.
        min: usize,
    },

    /// The email is empty after trimming.
    #[error("Email address is required.")]
    EmailRequired,

    /// The email does not look like `local@domain.tld`.
    #[error("Please enter a valid email (e.g., user@example.com).")]
    EmailInvalid,

    /// The phone number is empty after trimming.
    #[error("Phone number is required.")]
    PhoneRequired,

    /// The phone number is not a Finnish `+358` number.
    #[error("Must be a valid Finnish number (e.g., +358 40 1234567).")]
    PhoneInvalid,

    /// No birth date was given.
    #[error("Birth date is required.")]
    BirthDateRequired,

    /// The birth date is not a `YYYY-MM-DD` calendar date.
    #[error("Please enter a valid birth date.")]
    BirthDateInvalid,

    /// The birth date lies after today.
    #[error("Birth date cannot be in the future.")]
    BirthDateInFuture,

    /// The applicant is younger than the minimum age.
    #[error("You must be at least {min_age} years old to register.")]
    TooYoung {
        /// Minimum age in whole years.
        min_age: u32,
    },

    /// The terms checkbox was not ticked.
    #[error("You must accept the terms.")]
    TermsNotAccepted,
}

impl FieldValidationError {
    /// The field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::FullNameRequired | Self::FullNameIncomplete | Self::NamePartTooShort { .. } => {
                Field::FullName
            }
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::PhoneRequired | Self::PhoneInvalid => Field::Phone,
            Self::BirthDateRequired
            | Self::BirthDateInvalid
            | Self::BirthDateInFuture
            | Self::TooYoung { .. } => Field::BirthDate,
            Self::TermsNotAccepted => Field::Terms,
        }
    }
}

impl Serialize for FieldValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Errors raised while loading or checking a [`ValidatorConfig`](crate::config::ValidatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("Invalid config value for '{key}': {reason}")]
    Invalid {
        /// The offending key.
        key: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors raised when checking a rental start or end date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalDateError {
    /// No date was given.
    #[error("Rental date is required.")]
    Required,

    /// The value is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid rental date: {0}")]
    Invalid(String),

    /// The date lies before the earliest selectable day.
    #[error("Rental date cannot be before {earliest}.")]
    BeforeEarliest {
        /// The earliest selectable day as `YYYY-MM-DD`.
        earliest: String,
    },
}

/// The main error type for regform operations.
#[derive(Debug, Error)]
pub enum RegformError {
    /// A configuration error.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A rental date error.
    #[error("{0}")]
    RentalDate(#[from] RentalDateError),

    /// Tracing could not be initialized.
    #[error("Tracing setup failed: {0}")]
    Tracing(String),
}
