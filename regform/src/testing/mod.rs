//! Testing utilities for code built on regform.
//!
//! This module provides:
//! - Input fixtures that pass every rule by default
//! - Fixed clocks and validators pinned to a date
//! - Assertions for validation results

mod assertions;
mod fixtures;

pub use assertions::{
    assert_accepted, assert_failed_fields, assert_field_ok, assert_rejected,
    assert_rejected_with,
};
pub use fixtures::{fixed_clock, validator_on, InputFixture};
