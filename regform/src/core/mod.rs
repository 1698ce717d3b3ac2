//! Core data model for registration forms.
//!
//! This module contains the types passed between the view layer and the
//! validator:
//! - Form field identifiers
//! - Raw submission input
//! - Accepted registration records
//! - Validation results

mod field;
mod input;
mod record;
mod result;

pub use field::Field;
pub use input::RegistrationInput;
pub use record::RegistrationRecord;
pub use result::{FieldErrors, ValidationResult};
