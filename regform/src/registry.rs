//! Append-only log of accepted registrations.
//!
//! This is the data behind the registrations table on the form page: each
//! accepted submission adds one row at the end, and rows are never edited
//! or removed.

use crate::core::{RegistrationInput, RegistrationRecord, ValidationResult};
use crate::events::{EventSink, NoOpEventSink, REGISTRATION_ACCEPTED, REGISTRATION_REJECTED};
use crate::utils::format_en_gb;
use crate::validation::FormValidator;
use chrono::FixedOffset;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Display cells of one accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRow {
    /// Trimmed full name.
    pub full_name: String,
    /// Trimmed email address.
    pub email: String,
    /// Trimmed phone number.
    pub phone: String,
    /// Birth date as submitted.
    pub birth_date: String,
    /// Submission time as `DD/MM/YYYY, HH:MM:SS`.
    pub submitted: String,
}

impl RegistrationRow {
    /// Builds the row for `record`, showing the submission time in `offset`.
    #[must_use]
    pub fn from_record(record: &RegistrationRecord, offset: &FixedOffset) -> Self {
        Self {
            full_name: record.full_name().to_string(),
            email: record.email().to_string(),
            phone: record.phone().to_string(),
            birth_date: record.birth_date().to_string(),
            submitted: format_en_gb(&record.submitted_at().with_timezone(offset)),
        }
    }

    /// The cells in table order.
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.birth_date.as_str(),
            self.submitted.as_str(),
        ]
    }
}

/// Validates submissions and keeps the accepted ones in order.
pub struct RegistrationLog {
    validator: FormValidator,
    sink: Arc<dyn EventSink>,
    records: Vec<RegistrationRecord>,
}

impl std::fmt::Debug for RegistrationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationLog")
            .field("validator", &self.validator)
            .field("records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl Default for RegistrationLog {
    fn default() -> Self {
        Self::new(FormValidator::new())
    }
}

impl RegistrationLog {
    /// Creates an empty log that validates with `validator`.
    #[must_use]
    pub fn new(validator: FormValidator) -> Self {
        Self {
            validator,
            sink: Arc::new(NoOpEventSink),
            records: Vec::new(),
        }
    }

    /// Sets the sink that receives submission events.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The validator used for submissions.
    #[must_use]
    pub const fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Validates `input` and appends the record if it is accepted.
    ///
    /// The full result is returned either way so the caller can show field
    /// errors or clear the form.
    pub fn submit(&mut self, input: &RegistrationInput) -> ValidationResult {
        let result = self.validator.validate(input);

        match result.normalized() {
            Some(record) => {
                self.records.push(record.clone());
                info!(
                    registration_id = %record.id(),
                    total = self.records.len(),
                    "Registration appended"
                );
                self.sink.emit(
                    REGISTRATION_ACCEPTED,
                    Some(serde_json::json!({
                        "id": record.id(),
                        "submitted_at": record.submitted_at_iso(),
                        "position": self.records.len() - 1,
                    })),
                );
            }
            None => {
                let fields: Vec<&str> = result.errors().keys().map(|f| f.as_str()).collect();
                self.sink.emit(
                    REGISTRATION_REJECTED,
                    Some(serde_json::json!({ "fields": fields })),
                );
            }
        }

        result
    }

    /// Accepted records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[RegistrationRecord] {
        &self.records
    }

    /// The most recently accepted record.
    #[must_use]
    pub fn last(&self) -> Option<&RegistrationRecord> {
        self.records.last()
    }

    /// Number of accepted records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display rows for every record, in the validator clock's offset.
    ///
    /// The offset is read from the clock when `rows` is called, not stored
    /// with each record, so a clock that changes offset re-renders earlier
    /// rows in the new offset.
    #[must_use]
    pub fn rows(&self) -> Vec<RegistrationRow> {
        let now = self.validator.clock().now();
        let offset = now.offset();
        self.records
            .iter()
            .map(|record| RegistrationRow::from_record(record, offset))
            .collect()
    }
}
