use super::*;

#[test]
fn validate_selection_requires_exactly_one_file() {
    assert_eq!(validate_selection(0), Err("Please select a file first!"));
    assert_eq!(validate_selection(1), Ok(()));
    assert_eq!(validate_selection(2), Err("Select a single file."));
}

#[test]
fn begin_refuses_concurrent_upload() {
    let mut state = UploadState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.uploading);
}

#[test]
fn finish_success_sets_notice_and_clears_uploading() {
    let mut state = UploadState::default();
    state.begin();
    state.finish(UploadOutcome::Success);
    assert!(!state.uploading);
    assert_eq!(state.notice.as_deref(), Some("Upload successful!"));
}

#[test]
fn outcome_notices_match_each_failure_kind() {
    assert_eq!(UploadOutcome::Rejected.notice(), "Upload failed.");
    assert_eq!(UploadOutcome::TransportError.notice(), "Error uploading file.");
}

#[test]
fn dismiss_clears_matching_notice() {
    let mut state = UploadState::default();
    let ticket = state.finish(UploadOutcome::Rejected);
    state.dismiss(ticket);
    assert!(state.notice.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = UploadState::default();
    let old = state.finish(UploadOutcome::Rejected);
    state.begin();
    let new = state.finish(UploadOutcome::Success);
    state.dismiss(old);
    assert_eq!(state.notice.as_deref(), Some("Upload successful!"));
    state.dismiss(new);
    assert!(state.notice.is_none());
}

#[test]
fn outcome_classifies_transport_errors_separately() {
    assert_eq!(UploadOutcome::from_result::<()>(&Ok(())), UploadOutcome::Success);
    assert_eq!(
        UploadOutcome::from_result::<()>(&Err(ApiError::Transport("offline".to_owned()))),
        UploadOutcome::TransportError
    );
    assert_eq!(
        UploadOutcome::from_result::<()>(&Err(ApiError::Status { status: 413, message: None })),
        UploadOutcome::Rejected
    );
    assert_eq!(UploadOutcome::from_result::<()>(&Err(ApiError::Unauthorized)), UploadOutcome::Rejected);
}
