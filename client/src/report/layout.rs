//! Page layout for the printable document report.
//!
//! Layout is a single greedy pass over a running vertical cursor (mm from the
//! top edge). Before anything is placed, the space it needs is checked against
//! the bottom margin; if it would not fit, a new page starts and the cursor
//! returns to the top margin. Body text flows line by line, so long text spans
//! as many pages as it needs. Footers are stamped afterwards, once the page
//! count is known.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use super::wrap::wrap_text;
use crate::net::types::Role;
use crate::state::chat::{ChatEntry, Delivery};
use crate::state::documents::Document;
use crate::util::time::format_timestamp;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 20.0;
pub const TEXT_WIDTH_MM: f32 = 170.0;
pub const LINE_HEIGHT_MM: f32 = 5.0;
pub const IMAGE_WIDTH_MM: f32 = 100.0;
pub const IMAGE_HEIGHT_MM: f32 = 130.0;

const CONTENT_START_MM: f32 = 45.0;
const SECTION_GAP_MM: f32 = 10.0;
const FOOTER_INSET_X_MM: f32 = 30.0;
const FOOTER_INSET_Y_MM: f32 = 10.0;

/// Ink used for a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Body,
    Heading,
    Timestamp,
    Footer,
}

/// Something placed on a page. `y` is the distance from the top edge: the
/// baseline for text, the top edge for images.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    Text { x: f32, y: f32, size_pt: f32, tone: Tone, text: String },
    Image { x: f32, y: f32, width: f32, height: f32 },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageLayout {
    pub items: Vec<Item>,
    pub footer: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// One transcript line of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub order: u32,
    pub role: Role,
    pub content: String,
    pub sent_at: Option<String>,
}

/// Everything the layout needs, detached from view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportInput {
    pub filename: String,
    pub created_at: String,
    pub summary: String,
    pub text: String,
    pub has_image: bool,
    pub transcript: Vec<TranscriptEntry>,
}

impl ReportInput {
    /// Snapshot a document and its thread. Failed sends never reached the
    /// server and are left out.
    pub fn new(document: &Document, entries: &[ChatEntry]) -> Self {
        let transcript = entries
            .iter()
            .filter(|entry| !matches!(entry.delivery, Delivery::Failed(_)))
            .map(|entry| TranscriptEntry {
                order: entry.order,
                role: entry.role,
                content: entry.content.clone(),
                sent_at: entry.sent_at.clone(),
            })
            .collect();
        Self {
            filename: document.filename.clone(),
            created_at: document.created_at_display(),
            summary: document.summary.clone(),
            text: document.text.clone(),
            has_image: document.image.is_some(),
            transcript,
        }
    }
}

struct Cursor {
    pages: Vec<PageLayout>,
    y: f32,
}

impl Cursor {
    fn new() -> Self {
        Self { pages: vec![PageLayout::default()], y: MARGIN_MM }
    }

    /// Break the page if `needed` mm would cross the bottom margin.
    fn ensure(&mut self, needed: f32) {
        if self.y + needed > PAGE_HEIGHT_MM - MARGIN_MM {
            self.pages.push(PageLayout::default());
            self.y = MARGIN_MM;
        }
    }

    fn place(&mut self, item: Item) {
        if let Some(page) = self.pages.last_mut() {
            page.items.push(item);
        }
    }

    fn text_at(&mut self, y: f32, size_pt: f32, tone: Tone, text: impl Into<String>) {
        self.place(Item::Text { x: MARGIN_MM, y, size_pt, tone, text: text.into() });
    }

    /// Place wrapped lines one at a time, breaking pages between lines.
    fn flow(&mut self, lines: &[String], size_pt: f32, tone: Tone) {
        for line in lines {
            self.ensure(LINE_HEIGHT_MM);
            self.text_at(self.y, size_pt, tone, line.clone());
            self.y += LINE_HEIGHT_MM;
        }
    }

    fn section(&mut self, heading: &str, body: &str, placeholder: &str) {
        self.ensure(20.0);
        self.text_at(self.y, 14.0, Tone::Heading, heading);
        self.y += SECTION_GAP_MM;

        let body = if body.trim().is_empty() { placeholder } else { body };
        let lines = wrap_text(body, TEXT_WIDTH_MM, 12.0);
        self.flow(&lines, 12.0, Tone::Body);
        self.y += SECTION_GAP_MM;
    }

    fn transcript_entry(&mut self, entry: &TranscriptEntry) {
        self.ensure(30.0);
        self.text_at(self.y, 12.0, Tone::Body, format!("{}:", entry.role.transcript_label()));
        self.y += LINE_HEIGHT_MM;

        let lines = wrap_text(&entry.content, TEXT_WIDTH_MM, 11.0);
        self.flow(&lines, 11.0, Tone::Body);

        if let Some(sent_at) = entry.sent_at.as_deref() {
            self.ensure(LINE_HEIGHT_MM);
            self.text_at(self.y, 9.0, Tone::Timestamp, format_timestamp(sent_at));
        }
        self.y += SECTION_GAP_MM;
    }

    fn stamp_footers(mut self) -> ReportLayout {
        let total = self.pages.len();
        for (index, page) in self.pages.iter_mut().enumerate() {
            let footer = format!("Page {} of {total}", index + 1);
            page.items.push(Item::Text {
                x: PAGE_WIDTH_MM - FOOTER_INSET_X_MM,
                y: PAGE_HEIGHT_MM - FOOTER_INSET_Y_MM,
                size_pt: 10.0,
                tone: Tone::Footer,
                text: footer.clone(),
            });
            page.footer = footer;
        }
        ReportLayout { pages: self.pages }
    }
}

/// Lay out title, image, summary, full text and transcript across pages.
pub fn layout_report(input: &ReportInput) -> ReportLayout {
    let mut cursor = Cursor::new();

    cursor.text_at(20.0, 18.0, Tone::Body, format!("Document: {}", input.filename));
    cursor.text_at(30.0, 12.0, Tone::Body, format!("Created at: {}", input.created_at));
    cursor.y = CONTENT_START_MM;

    if input.has_image {
        cursor.ensure(IMAGE_HEIGHT_MM + SECTION_GAP_MM);
        cursor.place(Item::Image { x: MARGIN_MM, y: cursor.y, width: IMAGE_WIDTH_MM, height: IMAGE_HEIGHT_MM });
        cursor.y += IMAGE_HEIGHT_MM + SECTION_GAP_MM;
    }

    cursor.section("Summary:", &input.summary, "No summary available");
    cursor.section("Full Text:", &input.text, "No text available");

    cursor.ensure(30.0);
    cursor.text_at(cursor.y, 16.0, Tone::Heading, "Chat History");
    cursor.y += SECTION_GAP_MM;

    let mut transcript: Vec<&TranscriptEntry> = input.transcript.iter().collect();
    transcript.sort_by_key(|entry| entry.order);
    for entry in transcript {
        cursor.transcript_entry(entry);
    }

    cursor.stamp_footers()
}
