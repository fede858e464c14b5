//! Field validators for the sign-up form
//!
//! Every validator is a pure function of the current value. `recompute` runs
//! all of them plus the cross-field password check and replaces the error
//! sets held in [`FormStatus`]; it is called after every field mutation.

use std::collections::BTreeSet;

use super::types::{ErrorCode, FormFields, FormStatus};

pub const MIN_PASSWORD_LENGTH: usize = 6;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;
const MAX_DOMAIN_LABEL_LENGTH: usize = 63;
const ATEXT_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~-";

pub fn validate_email(value: &str) -> BTreeSet<ErrorCode> {
    let mut errors = BTreeSet::new();
    if value.is_empty() {
        errors.insert(ErrorCode::Required);
    } else if !is_valid_email(value) {
        errors.insert(ErrorCode::InvalidEmail);
    }
    errors
}

pub fn validate_password(value: &str) -> BTreeSet<ErrorCode> {
    let mut errors = BTreeSet::new();
    if value.is_empty() {
        errors.insert(ErrorCode::Required);
    } else if value.chars().count() < MIN_PASSWORD_LENGTH {
        errors.insert(ErrorCode::TooShort(MIN_PASSWORD_LENGTH));
    }
    errors
}

pub fn validate_required(value: &str) -> BTreeSet<ErrorCode> {
    let mut errors = BTreeSet::new();
    if value.is_empty() {
        errors.insert(ErrorCode::Required);
    }
    errors
}

pub fn validate_accept_terms(accepted: bool) -> BTreeSet<ErrorCode> {
    let mut errors = BTreeSet::new();
    if !accepted {
        errors.insert(ErrorCode::MustAcceptTerms);
    }
    errors
}

/// Cross-field check, run after the field validators
pub fn validate_password_match(fields: &FormFields) -> BTreeSet<ErrorCode> {
    let mut errors = BTreeSet::new();
    if fields.password != fields.confirm_password {
        errors.insert(ErrorCode::PasswordMismatch);
    }
    errors
}

/// Rebuilds every error set from the current field values.
/// Interaction markers are left untouched.
pub fn recompute(fields: &FormFields, status: &mut FormStatus) {
    status.email.errors = validate_email(&fields.email);
    status.password.errors = validate_password(&fields.password);
    status.confirm_password.errors = validate_required(&fields.confirm_password);
    status.display_name.errors = validate_required(&fields.display_name);
    status.accept_terms.errors = validate_accept_terms(fields.accept_terms);
    status.errors = validate_password_match(fields);
}

/// Email syntax check following the usual browser-form grammar:
/// dot-separated atext runs, a single `@`, then hostname labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local_part, domain_part)) = value.split_once('@') else {
        return false;
    };

    if local_part.is_empty() || local_part.len() > MAX_LOCAL_PART_LENGTH {
        return false;
    }

    let local_ok = local_part.split('.').all(|atom| {
        !atom.is_empty()
            && atom
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || ATEXT_SYMBOLS.contains(c))
    });
    if !local_ok {
        return false;
    }

    // A second '@' lands in the domain and fails the label check
    domain_part.split('.').all(is_valid_domain_label)
}

fn is_valid_domain_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_DOMAIN_LABEL_LENGTH {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
