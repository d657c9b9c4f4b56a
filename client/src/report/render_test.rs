use super::*;
use crate::report::layout::{ReportInput, TranscriptEntry, layout_report};
use crate::net::types::Role;

fn sample_layout(text: &str) -> ReportLayout {
    layout_report(&ReportInput {
        filename: "scan.png".to_owned(),
        created_at: "01/03/2024 10:05".to_owned(),
        summary: "Summary.".to_owned(),
        text: text.to_owned(),
        has_image: true,
        transcript: vec![TranscriptEntry {
            order: 1,
            role: Role::User,
            content: "What is this?".to_owned(),
            sent_at: None,
        }],
    })
}

#[test]
fn render_produces_pdf_bytes() {
    let bytes = render_pdf(&sample_layout("Body."), "scan.png", None).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn undecodable_image_is_skipped_not_fatal() {
    let bytes = render_pdf(&sample_layout("Body."), "scan.png", Some(&[0x89, b'P', b'N', b'G'])).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn multi_page_layout_renders() {
    let layout = sample_layout(&"word ".repeat(6000));
    assert!(layout.page_count() > 1);
    let bytes = render_pdf(&layout, "scan.png", None).unwrap();
    assert!(bytes.len() > 1000);
}

#[test]
fn image_transform_maps_top_down_box_to_pdf_space() {
    let transform = image_transform((300, 600), 20.0, 45.0, 100.0, 130.0);
    assert_eq!(transform.translate_x, Some(Mm(20.0)));
    assert_eq!(transform.translate_y, Some(Mm(297.0 - 45.0 - 130.0)));
    let scale_x = transform.scale_x.unwrap();
    let scale_y = transform.scale_y.unwrap();
    assert!((scale_x - 100.0 / 25.4).abs() < 1e-4);
    assert!((scale_y - 130.0 / 50.8).abs() < 1e-4);
}

#[test]
fn win_ansi_covers_latin1_and_typographic_punctuation() {
    for c in ['A', ' ', '~', 'ç', 'ã', 'ÿ', '€', '“', '—', '™'] {
        assert!(is_win_ansi(c), "{c:?} should encode");
    }
    for c in ['日', '🎉', 'Ā', '\u{7F}', '\t'] {
        assert!(!is_win_ansi(c), "{c:?} should not encode");
    }
}

#[test]
fn unencodable_chars_counts_dropped_glyphs_across_pages() {
    assert_eq!(unencodable_chars(&sample_layout("Plain body.")), 0);
    assert_eq!(unencodable_chars(&sample_layout("Ação 日本 🎉")), 3);
}

#[test]
fn render_still_succeeds_with_unencodable_text() {
    let bytes = render_pdf(&sample_layout("Ação 日本 🎉"), "scan.png", None).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
