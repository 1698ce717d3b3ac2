//! Raw form input as submitted by the view layer.

use serde::{Deserialize, Serialize};

/// The raw values of one registration submission attempt.
///
/// Values are kept exactly as the user entered them; trimming happens during
/// validation. Deserializes from the camelCase keys used by the form, with
/// missing keys treated as empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    /// Full name, untrimmed.
    pub full_name: String,
    /// Email address, untrimmed.
    pub email: String,
    /// Phone number, untrimmed.
    pub phone: String,
    /// Birth date as `YYYY-MM-DD`, or empty.
    pub birth_date: String,
    /// Whether the terms checkbox is ticked.
    pub terms_accepted: bool,
}

impl RegistrationInput {
    /// Creates an input from its five field values.
    #[must_use]
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        birth_date: impl Into<String>,
        terms_accepted: bool,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            birth_date: birth_date.into(),
            terms_accepted,
        }
    }
}
