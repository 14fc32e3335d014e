use super::*;
use crate::net::api::ApiError;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  mentor1 ", "s3cret"),
        Ok(("mentor1".to_owned(), "s3cret".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("mentor1", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("u", " pw "),
        Ok(("u".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn rejected_credentials_get_friendly_message() {
    assert_eq!(login_failed_message(&ApiError::Status(401)), "Invalid username or password.");
    assert_eq!(
        login_failed_message(&ApiError::Network("offline".to_owned())),
        "Sign in failed: request failed: offline"
    );
}
