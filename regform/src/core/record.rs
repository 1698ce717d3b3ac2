//! Accepted registrations.

use crate::utils::timestamps::serialize_iso_timestamp;
use crate::utils::{iso_timestamp, Timestamp};
use serde::Serialize;
use uuid::Uuid;

/// A registration that passed every validation rule.
///
/// Records are only created by the validator and expose no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    id: Uuid,
    full_name: String,
    email: String,
    phone: String,
    birth_date: String,
    #[serde(serialize_with = "serialize_iso_timestamp")]
    submitted_at: Timestamp,
}

impl RegistrationRecord {
    pub(crate) const fn new(
        id: Uuid,
        full_name: String,
        email: String,
        phone: String,
        birth_date: String,
        submitted_at: Timestamp,
    ) -> Self {
        Self {
            id,
            full_name,
            email,
            phone,
            birth_date,
            submitted_at,
        }
    }

    /// Time-ordered identifier of the registration.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Trimmed full name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Trimmed email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Trimmed phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Birth date exactly as submitted.
    #[must_use]
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// When the submission was validated.
    #[must_use]
    pub const fn submitted_at(&self) -> Timestamp {
        self.submitted_at
    }

    /// [`submitted_at`](Self::submitted_at) as an ISO-8601 string.
    #[must_use]
    pub fn submitted_at_iso(&self) -> String {
        iso_timestamp(&self.submitted_at)
    }
}
