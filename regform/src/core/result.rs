//! The outcome of one validation run.

use super::{Field, RegistrationRecord};
use crate::errors::FieldValidationError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::BTreeMap;

/// Field errors keyed by the field they belong to.
pub type FieldErrors = BTreeMap<Field, FieldValidationError>;

/// Either an accepted record or the field errors that rejected the input.
///
/// A result is valid exactly when it has no errors, and only a valid result
/// carries a normalized record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: FieldErrors,
    normalized: Option<RegistrationRecord>,
}

impl ValidationResult {
    /// Creates an accepted result.
    #[must_use]
    pub(crate) const fn accepted(record: RegistrationRecord) -> Self {
        Self {
            errors: BTreeMap::new(),
            normalized: Some(record),
        }
    }

    /// Creates a rejected result. `errors` must not be empty.
    #[must_use]
    pub(crate) const fn rejected(errors: FieldErrors) -> Self {
        Self {
            errors,
            normalized: None,
        }
    }

    /// Returns true if every rule passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failing fields and their errors.
    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The error for a single field, if it failed.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&FieldValidationError> {
        self.errors.get(&field)
    }

    /// The display message for a single field, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.error(field).map(ToString::to_string)
    }

    /// Display messages for every failing field.
    #[must_use]
    pub fn messages(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|(field, error)| (*field, error.to_string()))
            .collect()
    }

    /// The accepted record, if valid.
    #[must_use]
    pub const fn normalized(&self) -> Option<&RegistrationRecord> {
        self.normalized.as_ref()
    }

    /// Converts into a `Result`, yielding the record or the field errors.
    pub fn into_result(self) -> Result<RegistrationRecord, FieldErrors> {
        match self.normalized {
            Some(record) => Ok(record),
            None => Err(self.errors),
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 3)?;
        state.serialize_field("isValid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("normalized", &self.normalized)?;
        state.end()
    }
}
