//! PDF rendering of a computed `ReportLayout` with `printpdf`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use printpdf::image_crate;
use printpdf::{BuiltinFont, Color, Image, ImageTransform, Mm, PdfDocument, Rgb};

use super::ReportError;
use super::layout::{Item, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, ReportLayout, Tone};

const IMAGE_DPI: f32 = 300.0;
const MM_PER_INCH: f32 = 25.4;

fn tone_color(tone: Tone) -> Color {
    let (r, g, b) = match tone {
        Tone::Body => (0.0, 0.0, 0.0),
        Tone::Heading => (0.0, 0.0, 1.0),
        Tone::Timestamp => (156.0 / 255.0, 163.0 / 255.0, 175.0 / 255.0),
        Tone::Footer => (150.0 / 255.0, 150.0 / 255.0, 150.0 / 255.0),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Whether the built-in fonts' WinAnsi encoding can represent `c`.
fn is_win_ansi(c: char) -> bool {
    matches!(c, ' '..='~' | '\u{A0}'..='\u{FF}')
        || matches!(
            c,
            '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž' | '‘' | '’' | '“' | '”' | '•'
                | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ'
        )
}

/// Characters in the layout's text that Helvetica will drop.
fn unencodable_chars(layout: &ReportLayout) -> usize {
    layout
        .pages
        .iter()
        .flat_map(|page| &page.items)
        .filter_map(|item| match item {
            Item::Text { text, .. } => Some(text),
            Item::Image { .. } => None,
        })
        .flat_map(|text| text.chars())
        .filter(|c| !is_win_ansi(*c))
        .count()
}

/// Stretch transform mapping the decoded image onto a layout box.
#[allow(clippy::cast_precision_loss)]
fn image_transform(pixels: (u32, u32), x: f32, y: f32, width: f32, height: f32) -> ImageTransform {
    let native_width = pixels.0.max(1) as f32 * MM_PER_INCH / IMAGE_DPI;
    let native_height = pixels.1.max(1) as f32 * MM_PER_INCH / IMAGE_DPI;
    ImageTransform {
        translate_x: Some(Mm(x)),
        translate_y: Some(Mm(PAGE_HEIGHT_MM - y - height)),
        scale_x: Some(width / native_width),
        scale_y: Some(height / native_height),
        dpi: Some(IMAGE_DPI),
        ..ImageTransform::default()
    }
}

/// Render `layout` into PDF bytes. Image boxes are filled from `image` when it
/// decodes; otherwise they are left blank.
///
/// # Errors
///
/// Returns `ReportError::Pdf` if the font cannot be registered or the
/// document cannot be serialized.
pub fn render_pdf(layout: &ReportLayout, title: &str, image: Option<&[u8]>) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Page 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(e.to_string()))?;

    let dropped = unencodable_chars(layout);
    if dropped > 0 {
        leptos::logging::warn!("report {title}: {dropped} characters outside WinAnsi will not render");
    }

    let decoded = image.and_then(|bytes| match image_crate::load_from_memory(bytes) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            leptos::logging::warn!("report image skipped: {e}");
            None
        }
    });

    for (index, page) in layout.pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), format!("Page {}", index + 1))
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for item in &page.items {
            match item {
                Item::Text { x, y, size_pt, tone, text } => {
                    layer.set_fill_color(tone_color(*tone));
                    layer.use_text(text.clone(), *size_pt, Mm(*x), Mm(PAGE_HEIGHT_MM - y), &font);
                }
                Item::Image { x, y, width, height } => {
                    let Some(decoded) = decoded.as_ref() else {
                        continue;
                    };
                    let pixels = (decoded.width(), decoded.height());
                    Image::from_dynamic_image(decoded)
                        .add_to_layer(layer.clone(), image_transform(pixels, *x, *y, *width, *height));
                }
            }
        }
    }

    doc.save_to_bytes().map_err(|e| ReportError::Pdf(e.to_string()))
}
