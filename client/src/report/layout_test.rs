use super::*;

// =============================================================
// Helpers
// =============================================================

fn input(text: &str) -> ReportInput {
    ReportInput {
        filename: "invoice.png".to_owned(),
        created_at: "01/03/2024 10:05".to_owned(),
        summary: "An invoice.".to_owned(),
        text: text.to_owned(),
        has_image: true,
        transcript: Vec::new(),
    }
}

fn entry(order: u32, content: &str) -> TranscriptEntry {
    TranscriptEntry {
        order,
        role: Role::from_order_parity(order),
        content: content.to_owned(),
        sent_at: Some("2024-03-01T10:05:00Z".to_owned()),
    }
}

fn texts(layout: &ReportLayout) -> Vec<String> {
    layout
        .pages
        .iter()
        .flat_map(|page| page.items.iter())
        .filter_map(|item| match item {
            Item::Text { text, tone, .. } if *tone != Tone::Footer => Some(text.clone()),
            _ => None,
        })
        .collect()
}

// =============================================================
// Structure
// =============================================================

#[test]
fn short_report_fits_on_one_page_in_section_order() {
    let layout = layout_report(&input("Line one."));
    assert_eq!(layout.page_count(), 1);
    let texts = texts(&layout);
    assert_eq!(
        texts,
        vec![
            "Document: invoice.png",
            "Created at: 01/03/2024 10:05",
            "Summary:",
            "An invoice.",
            "Full Text:",
            "Line one.",
            "Chat History",
        ]
    );
}

#[test]
fn image_is_placed_in_fixed_box_below_title() {
    let layout = layout_report(&input("x"));
    let image = layout.pages[0]
        .items
        .iter()
        .find(|item| matches!(item, Item::Image { .. }))
        .unwrap();
    assert_eq!(image, &Item::Image { x: 20.0, y: 45.0, width: 100.0, height: 130.0 });
}

#[test]
fn missing_image_is_skipped_and_empty_text_gets_placeholders() {
    let mut report = input("");
    report.has_image = false;
    report.summary = "   ".to_owned();
    let layout = layout_report(&report);
    assert!(layout.pages[0].items.iter().all(|item| !matches!(item, Item::Image { .. })));
    let texts = texts(&layout);
    assert!(texts.contains(&"No summary available".to_owned()));
    assert!(texts.contains(&"No text available".to_owned()));
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn page_count_grows_monotonically_with_text_length() {
    let paragraph = "The quick brown fox jumps over the lazy dog. ";
    let mut previous = 0;
    let mut counts = Vec::new();
    for repeats in [1, 20, 60, 120, 240, 480, 960] {
        let count = layout_report(&input(&paragraph.repeat(repeats))).page_count();
        assert!(count >= previous, "page count shrank from {previous} to {count} at {repeats} repeats");
        previous = count;
        counts.push(count);
    }
    assert_eq!(counts[0], 1);
    assert!(*counts.last().unwrap() > 3);
}

#[test]
fn nothing_crosses_the_bottom_margin() {
    let layout = layout_report(&input(&"word ".repeat(5000)));
    for page in &layout.pages {
        for item in &page.items {
            match item {
                Item::Text { y, tone, .. } if *tone != Tone::Footer => assert!(*y <= PAGE_HEIGHT_MM - MARGIN_MM),
                Item::Image { y, height, .. } => assert!(y + height <= PAGE_HEIGHT_MM - MARGIN_MM),
                _ => {}
            }
        }
    }
}

#[test]
fn continuation_pages_start_at_top_margin() {
    let layout = layout_report(&input(&"word ".repeat(5000)));
    assert!(layout.page_count() > 1);
    for page in &layout.pages[1..] {
        match &page.items[0] {
            Item::Text { y, .. } | Item::Image { y, .. } => assert!((*y - MARGIN_MM).abs() < f32::EPSILON),
        }
    }
}

#[test]
fn every_page_is_stamped_page_i_of_n() {
    let layout = layout_report(&input(&"word ".repeat(8000)));
    let total = layout.page_count();
    assert!(total > 2);
    for (index, page) in layout.pages.iter().enumerate() {
        let expected = format!("Page {} of {total}", index + 1);
        assert_eq!(page.footer, expected);
        let stamped = page.items.iter().any(|item| {
            matches!(item, Item::Text { text, tone: Tone::Footer, x, y, .. }
                if *text == expected && (*x - 180.0).abs() < 0.01 && (*y - 287.0).abs() < 0.01)
        });
        assert!(stamped, "page {} missing footer", index + 1);
    }
}

// =============================================================
// Transcript
// =============================================================

#[test]
fn transcript_is_sorted_by_order_regardless_of_input_order() {
    let mut report = input("x");
    report.transcript = vec![entry(3, "third"), entry(1, "first"), entry(4, "fourth"), entry(2, "second")];
    let texts = texts(&layout_report(&report));
    let start = texts.iter().position(|t| t == "Chat History").unwrap();
    let transcript: Vec<_> = texts[start + 1..]
        .iter()
        .filter(|t| !t.contains('/'))
        .cloned()
        .collect();
    assert_eq!(
        transcript,
        vec!["Question:", "first", "Answer:", "second", "Question:", "third", "Answer:", "fourth"]
    );
}

#[test]
fn transcript_labels_follow_explicit_role() {
    let mut report = input("x");
    let mut reply = entry(1, "odd but assistant");
    reply.role = Role::Assistant;
    report.transcript = vec![reply];
    let texts = texts(&layout_report(&report));
    assert!(texts.contains(&"Answer:".to_owned()));
    assert!(!texts.contains(&"Question:".to_owned()));
}

#[test]
fn transcript_entries_carry_formatted_timestamps() {
    let mut report = input("x");
    report.transcript = vec![entry(1, "hello")];
    let texts = texts(&layout_report(&report));
    assert!(texts.contains(&"01/03/2024 10:05".to_owned()));
}

#[test]
fn long_transcript_paginates() {
    let mut report = input("x");
    report.transcript = (1..=60).map(|order| entry(order, "A reasonably short chat line.")).collect();
    let layout = layout_report(&report);
    assert!(layout.page_count() >= 3);
}
