use super::*;
use crate::net::types::{DocumentDto, Role};
use crate::state::chat::Delivery;

fn document() -> Document {
    Document::from_dto(DocumentDto {
        id: "d1".to_owned(),
        filename: "receipt.jpg".to_owned(),
        created_at: "2024-03-01T10:05:00Z".to_owned(),
        summary: Some("Coffee receipt.".to_owned()),
        text: Some("1x Espresso 2.50".to_owned()),
        image: Vec::new(),
    })
}

fn chat_entry(order: u32, delivery: Delivery) -> ChatEntry {
    ChatEntry {
        id: format!("m{order}"),
        content: format!("message {order}"),
        order,
        sent_at: None,
        role: Role::from_order_parity(order),
        delivery,
    }
}

#[test]
fn report_filename_appends_suffix() {
    assert_eq!(report_filename("receipt.jpg"), "receipt.jpg-report.pdf");
}

#[test]
fn report_filename_replaces_path_separators_and_handles_blank() {
    assert_eq!(report_filename("a/b\\c"), "a_b_c-report.pdf");
    assert_eq!(report_filename("  "), "document-report.pdf");
}

#[test]
fn build_report_names_file_and_renders_pdf() {
    let entries = vec![chat_entry(2, Delivery::Confirmed), chat_entry(1, Delivery::Confirmed)];
    let (name, bytes) = build_report(&document(), &entries).unwrap();
    assert_eq!(name, "receipt.jpg-report.pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn report_input_skips_failed_sends() {
    let entries = vec![
        chat_entry(1, Delivery::Confirmed),
        chat_entry(2, Delivery::Confirmed),
        chat_entry(3, Delivery::Failed("offline".to_owned())),
    ];
    let input = layout::ReportInput::new(&document(), &entries);
    assert_eq!(input.transcript.len(), 2);
    assert!(!input.has_image);
    assert_eq!(input.created_at, "01/03/2024 10:05");
}
