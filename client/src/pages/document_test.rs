use super::*;

#[test]
fn send_failure_reason_distinguishes_network_errors() {
    assert_eq!(send_failure_reason(&ApiError::Transport("offline".to_owned())), "network error");
}

#[test]
fn send_failure_reason_uses_server_message_when_present() {
    let err = ApiError::Status { status: 400, message: Some("content should not be empty".to_owned()) };
    assert_eq!(send_failure_reason(&err), "content should not be empty");
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(send_failure_reason(&err), "the server rejected the message");
}

#[test]
fn report_error_text_is_user_facing() {
    assert_eq!(report_error_text(&ReportError::Pdf("font".to_owned())), "Failed to generate the PDF report.");
}
