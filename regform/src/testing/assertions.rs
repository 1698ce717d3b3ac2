//! Test assertions for validation results.

use crate::core::{Field, RegistrationRecord, ValidationResult};

/// Asserts that the result is valid and returns its record.
pub fn assert_accepted(result: &ValidationResult) -> &RegistrationRecord {
    assert!(
        result.is_valid(),
        "Expected the registration to be accepted, got errors: {:?}",
        result.messages()
    );
    result
        .normalized()
        .unwrap_or_else(|| panic!("Valid result without a normalized record"))
}

/// Asserts that the result was rejected.
pub fn assert_rejected(result: &ValidationResult) {
    assert!(
        !result.is_valid(),
        "Expected the registration to be rejected, but it was accepted"
    );
    assert!(
        result.normalized().is_none(),
        "Rejected result carries a normalized record"
    );
}

/// Asserts that `field` failed with exactly `message`.
pub fn assert_rejected_with(result: &ValidationResult, field: Field, message: &str) {
    assert_rejected(result);
    assert_eq!(
        result.message(field).as_deref(),
        Some(message),
        "Unexpected message for field '{}'. All errors: {:?}",
        field,
        result.messages()
    );
}

/// Asserts that `field` has no error.
pub fn assert_field_ok(result: &ValidationResult, field: Field) {
    assert!(
        result.error(field).is_none(),
        "Expected field '{}' to pass, got: {:?}",
        field,
        result.message(field)
    );
}

/// Asserts that exactly `fields` failed.
pub fn assert_failed_fields(result: &ValidationResult, fields: &[Field]) {
    let mut expected = fields.to_vec();
    expected.sort();
    let actual: Vec<Field> = result.errors().keys().copied().collect();
    assert_eq!(actual, expected, "Unexpected set of failing fields");
}
