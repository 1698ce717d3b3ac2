//! Per-field validation rules.
//!
//! Each check returns the normalized value on success or the first failing
//! condition for its field. Checks are independent of each other.

use crate::errors::FieldValidationError;
use crate::utils::{parse_calendar_date, years_before};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email regex: {e}"))
    })
}

const PHONE_PREFIX: &str = "+358";
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 7..=10;

fn phone_regex() -> &'static Regex {
    // +358, optional separator, an optional area code of up to three digits
    // followed by one space or hyphen, then the subscriber digits.
    PHONE_RE.get_or_init(|| {
        Regex::new(r"^\+358[ -]?(?:[0-9]{1,3}[ -])?[0-9]{4,10}$")
            .unwrap_or_else(|e| panic!("phone regex: {e}"))
    })
}

/// Checks the full name and returns it trimmed.
///
/// The name is split on single spaces; runs of spaces do not create empty
/// parts. Part length is counted in characters.
pub fn check_full_name(
    raw: &str,
    min_parts: usize,
    min_part_len: usize,
) -> Result<String, FieldValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::FullNameRequired);
    }

    let parts: Vec<&str> = trimmed.split(' ').filter(|part| !part.is_empty()).collect();
    if parts.len() < min_parts {
        return Err(FieldValidationError::FullNameIncomplete);
    }
    if parts.iter().any(|part| part.chars().count() < min_part_len) {
        return Err(FieldValidationError::NamePartTooShort { min: min_part_len });
    }

    Ok(trimmed.to_string())
}

/// Checks the email address and returns it trimmed.
pub fn check_email(raw: &str) -> Result<String, FieldValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::EmailRequired);
    }
    if !email_regex().is_match(trimmed) {
        return Err(FieldValidationError::EmailInvalid);
    }
    Ok(trimmed.to_string())
}

/// Checks the Finnish phone number and returns it trimmed.
///
/// After `+358` the number holds 7 to 10 digits in total, with at most one
/// separator after the prefix and one after a short area code.
pub fn check_phone(raw: &str) -> Result<String, FieldValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldValidationError::PhoneRequired);
    }
    if !phone_regex().is_match(trimmed) {
        return Err(FieldValidationError::PhoneInvalid);
    }

    let digits = trimmed
        .strip_prefix(PHONE_PREFIX)
        .map_or(0, |rest| rest.bytes().filter(u8::is_ascii_digit).count());
    if !PHONE_DIGITS.contains(&digits) {
        return Err(FieldValidationError::PhoneInvalid);
    }
    Ok(trimmed.to_string())
}

/// Checks the birth date against `today`.
///
/// The value is not trimmed. A birth date exactly `min_age` years before
/// today is accepted.
pub fn check_birth_date(
    raw: &str,
    today: NaiveDate,
    min_age: u32,
) -> Result<NaiveDate, FieldValidationError> {
    if raw.is_empty() {
        return Err(FieldValidationError::BirthDateRequired);
    }

    let birth_date =
        parse_calendar_date(raw).map_err(|_| FieldValidationError::BirthDateInvalid)?;
    if birth_date > today {
        return Err(FieldValidationError::BirthDateInFuture);
    }
    if birth_date > years_before(today, min_age) {
        return Err(FieldValidationError::TooYoung { min_age });
    }

    Ok(birth_date)
}

/// Checks that the terms were accepted.
pub const fn check_terms(accepted: bool) -> Result<(), FieldValidationError> {
    if accepted {
        Ok(())
    } else {
        Err(FieldValidationError::TermsNotAccepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_name_ok() {
        assert_eq!(check_full_name("  Jane Doe ", 2, 2).unwrap(), "Jane Doe");
        assert_eq!(check_full_name("Al Bo", 2, 2).unwrap(), "Al Bo");
        assert_eq!(check_full_name("Mary  Ann Smith", 2, 2).unwrap(), "Mary  Ann Smith");
    }

    #[test]
    fn test_full_name_required() {
        assert_eq!(check_full_name("", 2, 2), Err(FieldValidationError::FullNameRequired));
        assert_eq!(check_full_name("   \t ", 2, 2), Err(FieldValidationError::FullNameRequired));
    }

    #[test]
    fn test_full_name_incomplete() {
        assert_eq!(check_full_name("John", 2, 2), Err(FieldValidationError::FullNameIncomplete));
        // Only single spaces separate parts.
        assert_eq!(
            check_full_name("Jane\tDoe", 2, 2),
            Err(FieldValidationError::FullNameIncomplete)
        );
    }

    #[test]
    fn test_full_name_part_too_short() {
        assert_eq!(
            check_full_name("A Bo", 2, 2),
            Err(FieldValidationError::NamePartTooShort { min: 2 })
        );
        assert_eq!(check_full_name("Åsa Öz", 2, 2).unwrap(), "Åsa Öz");
    }

    #[test]
    fn test_email() {
        assert_eq!(check_email(" a@b.com ").unwrap(), "a@b.com");
        assert_eq!(check_email(""), Err(FieldValidationError::EmailRequired));
        for bad in ["abc", "a@b", "a b@c.com", "a@@b.com", "@b.com", "a@b.", "a@.com"] {
            assert_eq!(check_email(bad), Err(FieldValidationError::EmailInvalid), "{bad}");
        }
        assert!(check_email("first.last@sub.example.co").is_ok());
    }

    #[test]
    fn test_phone_ok() {
        for ok in [
            "+358401234567",
            "+358 401234567",
            "+358-401234567",
            "+358 40 1234567",
            "+358-40-1234567",
            "+35840 1234567",
            "+358 401 234567",
            "+358 9 1234567",
            "+3581234567",
            "+3581234567890",
        ] {
            assert_eq!(check_phone(ok).unwrap(), ok, "{ok}");
        }
        assert_eq!(check_phone("  +358401234567 ").unwrap(), "+358401234567");
    }

    #[test]
    fn test_phone_invalid() {
        assert_eq!(check_phone(""), Err(FieldValidationError::PhoneRequired));
        for bad in [
            "+35840123",
            "0401234567",
            "+358123456",
            "+35812345678901",
            "+358  401234567",
            "+358 40  1234567",
            "+46 701234567",
            "+358 40 123456a",
            "+358 ٤٠١٢٣٤٥٦٧",
            "+358-4-0-1-2-3-4-5",
            "+358 4 0 1 2 3 4 5 6 7",
            "+3584-0-1234567",
            "+358 40 12 34 567",
            "+358 4012 34567",
            "+358 40 123",
            "+358 401 23456789",
        ] {
            assert_eq!(check_phone(bad), Err(FieldValidationError::PhoneInvalid), "{bad}");
        }
    }

    #[test]
    fn test_birth_date() {
        let today = date(2026, 10, 16);
        assert_eq!(check_birth_date("", today, 13), Err(FieldValidationError::BirthDateRequired));
        assert_eq!(
            check_birth_date("not-a-date", today, 13),
            Err(FieldValidationError::BirthDateInvalid)
        );
        assert_eq!(
            check_birth_date(" 2000-01-01", today, 13),
            Err(FieldValidationError::BirthDateInvalid)
        );
        assert_eq!(
            check_birth_date("2026-10-17", today, 13),
            Err(FieldValidationError::BirthDateInFuture)
        );
        assert_eq!(
            check_birth_date("2016-10-16", today, 13),
            Err(FieldValidationError::TooYoung { min_age: 13 })
        );
        assert_eq!(
            check_birth_date("2013-10-17", today, 13),
            Err(FieldValidationError::TooYoung { min_age: 13 })
        );
        assert_eq!(check_birth_date("2013-10-16", today, 13).unwrap(), date(2013, 10, 16));
        assert_eq!(check_birth_date("2012-10-16", today, 13).unwrap(), date(2012, 10, 16));
    }

    #[test]
    fn test_birth_date_leap_day_threshold() {
        // Thirteen years before 29 Feb 2028 rolls over to 1 Mar 2015.
        let today = date(2028, 2, 29);
        assert!(check_birth_date("2015-03-01", today, 13).is_ok());
        assert_eq!(
            check_birth_date("2015-03-02", today, 13),
            Err(FieldValidationError::TooYoung { min_age: 13 })
        );
    }

    #[test]
    fn test_terms() {
        assert!(check_terms(true).is_ok());
        assert_eq!(check_terms(false), Err(FieldValidationError::TermsNotAccepted));
    }
}
