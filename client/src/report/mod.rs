//! Printable report for one document and its chat thread.
//!
//! ARCHITECTURE
//! ============
//! `wrap` estimates line breaks, `layout` paginates into positioned items, and
//! `render` draws those items with `printpdf`. Only `render` knows about PDF;
//! pagination is plain data and is tested without producing a file.

pub mod layout;
pub mod render;
pub mod wrap;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use crate::state::chat::ChatEntry;
use crate::state::documents::Document;

/// Report generation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportError {
    #[error("pdf generation failed: {0}")]
    Pdf(String),
}

/// File name offered for download: `<filename>-report.pdf`.
pub fn report_filename(filename: &str) -> String {
    let stem: String = filename
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    let stem = if stem.is_empty() { "document".to_owned() } else { stem };
    format!("{stem}-report.pdf")
}

/// Lay out and render the report. Returns the download name and PDF bytes.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if rendering fails.
pub fn build_report(document: &Document, entries: &[ChatEntry]) -> Result<(String, Vec<u8>), ReportError> {
    let input = layout::ReportInput::new(document, entries);
    let report = layout::layout_report(&input);
    let image = document.image.as_ref().map(|image| image.bytes.as_slice());
    let bytes = render::render_pdf(&report, &document.filename, image)?;
    Ok((report_filename(&document.filename), bytes))
}
