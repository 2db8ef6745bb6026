//! Field validation for the CV form
//!
//! Every rule runs independently; one field failing never hides another.

use crate::state::{CvForm, ErrorKey, ErrorMap};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const CV_REQUIRED: &str = "CV file is required";

/// `local@domain.tld`: no whitespace, exactly one '@', a '.' inside the domain
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// E.164-like: optional '+', first digit 1-9, 2 to 15 digits in total
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("phone pattern is a valid regex")
});

/// Validate the whole form. An empty map means the form may be submitted.
pub fn validate(form: &CvForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.name.is_blank() {
        errors.set(ErrorKey::Name, NAME_REQUIRED);
    }

    if form.email.is_blank() {
        errors.set(ErrorKey::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(form.email.as_text()) {
        errors.set(ErrorKey::Email, EMAIL_INVALID);
    }

    if form.phone.is_blank() {
        errors.set(ErrorKey::Phone, PHONE_REQUIRED);
    } else if !is_valid_phone(form.phone.as_text()) {
        errors.set(ErrorKey::Phone, PHONE_INVALID);
    }

    if form.cv.is_none() {
        errors.set(ErrorKey::Cv, CV_REQUIRED);
    }

    errors
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Drop whitespace, parentheses and hyphens
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '-'))
        .collect()
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(&normalize_phone(phone))
}
