//! Form field identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field of the registration form.
///
/// Ordering follows the order of the fields on the form, so error maps keyed
/// by `Field` iterate top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// The applicant's full name.
    FullName,
    /// Contact email address.
    Email,
    /// Finnish phone number.
    Phone,
    /// Birth date as an ISO calendar date.
    BirthDate,
    /// The terms-of-service checkbox.
    Terms,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::BirthDate,
        Self::Terms,
    ];

    /// The wire name of the field, as used in JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::BirthDate => "birthDate",
            Self::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
