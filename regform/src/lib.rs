//! # Regform
//!
//! Validation for registration and order forms.
//!
//! Regform turns the raw values of a registration form into either an
//! accepted, normalized record or a set of per-field error messages:
//!
//! - **Field rules**: full name, email, Finnish phone number, birth date
//!   (not in the future, minimum age) and the terms checkbox
//! - **Complete results**: every rule runs, so all failing fields are
//!   reported at once
//! - **Accepted log**: an append-only list of accepted registrations with
//!   display rows for a results table
//! - **Rental dates**: the "not before today" bound of the order form
//!
//! ## Quick Start
//!
//! ```rust
//! use regform::prelude::*;
//!
//! let mut log = RegistrationLog::new(FormValidator::new());
//! let input = RegistrationInput::new(
//!     "Jane Doe",
//!     "jane@example.com",
//!     "+358 40 1234567",
//!     "2000-01-01",
//!     true,
//! );
//!
//! let result = log.submit(&input);
//! assert!(result.is_valid());
//! assert_eq!(log.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod observability;
pub mod registry;
pub mod rental;
pub mod testing;
pub mod utils;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::ValidatorConfig;
    pub use crate::core::{
        Field, FieldErrors, RegistrationInput, RegistrationRecord, ValidationResult,
    };
    pub use crate::errors::{ConfigError, FieldValidationError, RegformError, RentalDateError};
    pub use crate::events::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
    pub use crate::registry::{RegistrationLog, RegistrationRow};
    pub use crate::rental::RentalDateBounds;
    pub use crate::validation::FormValidator;
}
