//! Utility functions for identifiers and timestamp handling.

pub mod timestamps;
mod uuid_utils;

pub use timestamps::{
    format_en_gb, iso_timestamp, now_utc, parse_calendar_date, years_before, Timestamp,
    TimestampError,
};
pub use uuid_utils::generate_uuid_v7;
