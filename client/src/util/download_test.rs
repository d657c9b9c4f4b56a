use super::*;

#[test]
fn blob_url_outlives_the_click_by_seconds() {
    let delay = std::time::Duration::from_millis(u64::from(REVOKE_DELAY_MS));
    assert!(delay >= std::time::Duration::from_secs(10));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_outside_browser_reports_error() {
    assert_eq!(
        save_bytes(b"%PDF-1.3", "scan-report.pdf", "application/pdf"),
        Err("downloads require a browser".to_owned())
    );
}
