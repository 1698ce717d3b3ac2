//! Registration form validation.
//!
//! [`rules`] holds one check per field; [`FormValidator`] runs all of them
//! and assembles a [`ValidationResult`](crate::core::ValidationResult).

pub mod rules;
mod validator;

pub use validator::FormValidator;
