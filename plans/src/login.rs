//! Client-side credential checks for the login form.
//!
//! These checks only save a round trip; the server remains the authority.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Why a login attempt was blocked before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Please enter both email and password.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Validate raw form input and build the login payload.
///
/// # Errors
///
/// Returns [`LoginError::MissingField`] when either input is empty and
/// [`LoginError::InvalidEmail`] when the email is not `local@domain.tld`.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, LoginError> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(LoginError::InvalidEmail);
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Match `^[\w-]+(\.[\w-]+)*@([\w-]+\.)+[a-zA-Z]{2,7}$`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if !local.split('.').all(is_word_segment) {
        return false;
    }

    let Some((hosts, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    hosts.split('.').all(is_word_segment)
        && (2..=7).contains(&tld.len())
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_word_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
