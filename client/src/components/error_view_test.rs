use super::*;

#[test]
fn missing_or_blank_message_falls_back_to_not_found() {
    assert_eq!(display_message(None), "Document not found");
    assert_eq!(display_message(Some("   ".to_owned())), "Document not found");
}

#[test]
fn explicit_message_is_shown() {
    assert_eq!(display_message(Some("Failed to fetch document".to_owned())), "Failed to fetch document");
}

#[cfg(feature = "ssr")]
#[test]
fn renders_default_message_and_home_link() {
    let html = Owner::new().with(|| view! { <ErrorView/> }.to_html());
    assert!(html.contains("Document not found"));
    assert!(html.contains("← Return to Home"));
    assert!(html.contains(r#"href="/""#));
}

#[cfg(feature = "ssr")]
#[test]
fn renders_failure_text_for_missing_document() {
    let html = Owner::new().with(|| view! { <ErrorView message="Failed to read document"/> }.to_html());
    assert!(html.contains("Failed to read document"));
    assert!(!html.contains("Document not found"));
    assert!(html.contains("← Return to Home"));
}
