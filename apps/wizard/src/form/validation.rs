use chrono::{Datelike, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::form::schema::FieldFormat;

pub const MIN_BIRTH_YEAR: i32 = 1900;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// Canonical mobile rule: 010 followed by exactly eight digits, hyphens ignored.
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^010[0-9]{8}$").expect("mobile pattern compiles"));

/// A user-facing problem with a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Enter a valid mobile number (010 followed by 8 digits)")]
    InvalidMobile,

    #[error("Enter a valid birth year")]
    InvalidBirthYear,
}

/// Validates one field value against the current calendar year.
///
/// `required` is whether the field is required on the *current* step.
/// Returns `None` when the value is acceptable.
pub fn validate(format: FieldFormat, value: &str, required: bool) -> Option<FieldError> {
    validate_at(format, value, required, Local::now().year())
}

/// Same as [`validate`] with an explicit "current year" for the birth-year range.
pub fn validate_at(
    format: FieldFormat,
    value: &str,
    required: bool,
    current_year: i32,
) -> Option<FieldError> {
    if required && value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    if value.is_empty() {
        return None;
    }

    match format {
        FieldFormat::Text => None,
        FieldFormat::Email => (!EMAIL_RE.is_match(value)).then_some(FieldError::InvalidEmail),
        FieldFormat::Mobile => {
            let digits = value.replace('-', "");
            (!MOBILE_RE.is_match(&digits)).then_some(FieldError::InvalidMobile)
        }
        FieldFormat::BirthYear => match value.trim().parse::<i32>() {
            Ok(year) if (MIN_BIRTH_YEAR..=current_year).contains(&year) => None,
            _ => Some(FieldError::InvalidBirthYear),
        },
    }
}
