use super::*;

#[test]
fn from_status_maps_401_to_unauthorized() {
    assert_eq!(ApiError::from_status(401, None), ApiError::Unauthorized);
    assert!(ApiError::from_status(401, Some("expired".to_owned())).is_unauthorized());
}

#[test]
fn from_status_keeps_other_statuses() {
    assert_eq!(
        ApiError::from_status(404, Some("Document not found".to_owned())),
        ApiError::Status { status: 404, message: Some("Document not found".to_owned()) }
    );
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("Name already taken".to_owned()) };
    assert_eq!(err.user_message("Registration failed."), "Name already taken");
}

#[test]
fn user_message_falls_back_for_blank_or_transport() {
    let blank = ApiError::Status { status: 400, message: Some("  ".to_owned()) };
    assert_eq!(blank.user_message("Invalid name or password."), "Invalid name or password.");
    let transport = ApiError::Transport("offline".to_owned());
    assert_eq!(transport.user_message("Error logging in."), "Error logging in.");
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.to_string(), "request failed with status 500");
}

#[test]
fn aborted_is_flagged() {
    assert!(ApiError::Aborted.is_aborted());
    assert!(!ApiError::Unavailable.is_aborted());
}
