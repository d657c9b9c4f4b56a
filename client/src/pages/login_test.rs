use super::*;

#[test]
fn validate_credentials_trims_name_and_keeps_password() {
    assert_eq!(
        validate_credentials("  alice ", " secret "),
        Ok(Credentials { name: "alice".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both name and password."));
    assert_eq!(validate_credentials("alice", ""), Err("Enter both name and password."));
}

#[test]
fn login_error_message_uses_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Wrong password".to_owned()) };
    assert_eq!(login_error_message(&err), "Wrong password");
}

#[test]
fn login_error_message_falls_back() {
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Invalid name or password.");
    assert_eq!(login_error_message(&ApiError::Transport("offline".to_owned())), "Error logging in.");
}
