use super::*;

#[test]
fn both_fields_required() {
    assert_eq!(validate_credentials("", ""), Err(LoginError::MissingField));
    assert_eq!(validate_credentials("a@b.com", ""), Err(LoginError::MissingField));
    assert_eq!(validate_credentials("", "secret"), Err(LoginError::MissingField));
}

#[test]
fn valid_credentials_pass_through_unchanged() {
    assert_eq!(
        validate_credentials("jane.doe@mail.example.org", "hunter2"),
        Ok(Credentials {
            email: "jane.doe@mail.example.org".to_owned(),
            password: "hunter2".to_owned(),
        })
    );
}

#[test]
fn accepts_common_addresses() {
    for email in ["a@b.co", "first_last@sub-domain.example.com", "x-y.z@host.museum"] {
        assert!(is_valid_email(email), "{email} should be accepted");
    }
}

#[test]
fn rejects_addresses_outside_the_pattern() {
    for email in [
        "plainaddress",
        "@example.com",
        "user@",
        "user@localhost",
        "user@example.c",
        "user@example.toolongtld",
        "user@example.c0m",
        "user..name@example.com",
        ".user@example.com",
        "user@.example.com",
        "user@example..com",
        "us er@example.com",
        "user+tag@example.com",
        "user@exa@mple.com",
    ] {
        assert!(!is_valid_email(email), "{email} should be rejected");
    }
}

#[test]
fn invalid_email_blocks_submission() {
    assert_eq!(
        validate_credentials("not-an-email", "secret"),
        Err(LoginError::InvalidEmail)
    );
}

#[test]
fn error_messages_match_alert_copy() {
    assert_eq!(
        LoginError::MissingField.to_string(),
        "Please enter both email and password."
    );
    assert_eq!(LoginError::InvalidEmail.to_string(), "Please enter a valid email address.");
}
