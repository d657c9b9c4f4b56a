use super::*;

#[test]
fn register_error_message_prefers_server_validation_text() {
    let err = ApiError::Status { status: 400, message: Some("name too short, password too short".to_owned()) };
    assert_eq!(register_error_message(&err), "name too short, password too short");
}

#[test]
fn register_error_message_falls_back_by_kind() {
    assert_eq!(register_error_message(&ApiError::Status { status: 409, message: None }), "Registration failed.");
    assert_eq!(register_error_message(&ApiError::Transport("offline".to_owned())), "Error registering.");
}
