//! Greedy word wrap against an estimated Helvetica advance width.
//!
//! Built-in PDF fonts carry no metrics we can query at layout time, so line
//! capacity is estimated from an average glyph advance of half an em. This
//! slightly overestimates narrow text and underestimates capitals, which is
//! acceptable for a printable report.

#[cfg(test)]
#[path = "wrap_test.rs"]
mod wrap_test;

const PT_TO_MM: f32 = 0.352_778;
const AVG_ADVANCE_EM: f32 = 0.5;

/// Characters that fit on one line of `width_mm` at `font_size_pt`.
pub fn line_capacity(width_mm: f32, font_size_pt: f32) -> usize {
    let advance_mm = font_size_pt * AVG_ADVANCE_EM * PT_TO_MM;
    if advance_mm <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let capacity = (width_mm / advance_mm).floor() as usize;
    capacity.max(1)
}

/// Split `text` into lines no wider than `width_mm`. Explicit newlines are
/// kept; words longer than a line are hard-split.
pub fn wrap_text(text: &str, width_mm: f32, font_size_pt: f32) -> Vec<String> {
    let capacity = line_capacity(width_mm, font_size_pt);
    let normalized = text.replace("\r\n", "\n");
    let trimmed = normalized.trim_end();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for paragraph in trimmed.split('\n') {
        wrap_paragraph(paragraph, capacity, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, capacity: usize, lines: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in paragraph.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > capacity {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(capacity).peekable();
            while let Some(chunk) = chunks.next() {
                if chunks.peek().is_some() {
                    lines.push(chunk.iter().collect());
                } else {
                    current = chunk.iter().collect();
                    current_len = chunk.len();
                }
            }
            continue;
        }

        let needed = if current.is_empty() { word_len } else { current_len + 1 + word_len };
        if needed > capacity {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    lines.push(current);
}
