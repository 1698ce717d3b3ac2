//! UUID generation for accepted registrations.

use uuid::Uuid;

/// Generates a new UUID v7 (time-ordered).
///
/// Registration ids use v7 so that sorting by id matches submission order.
#[must_use]
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
