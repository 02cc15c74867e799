use super::*;

/// Normalized output shorter than this (whitespace-trimmed) means extraction
/// effectively failed; detection results below it are noise.
pub const MIN_MEANINGFUL_TEXT_CHARS: usize = 100;

pub fn page_placeholder(page_number: usize) -> String {
    format!("[No extractable text on page {}]", page_number)
}

/// Joins per-page text into one buffer, preceding each page with a
/// `----- PAGE <n> -----` marker (1-based). Pages with no extractable text
/// are replaced by a literal placeholder so page numbering stays intact.
pub fn normalize_pages(pages: &[String]) -> String {
    let mut full_text = String::new();

    for (index, page_text) in pages.iter().enumerate() {
        let page_number = index + 1;
        full_text.push_str(&format!("\n\n----- PAGE {} -----\n\n", page_number));
        if page_text.trim().is_empty() {
            full_text.push_str(&page_placeholder(page_number));
        } else {
            full_text.push_str(page_text);
        }
    }

    full_text
}

pub fn is_degenerate_extraction(full_text: &str, page_count: usize) -> bool {
    page_count > 0 && char_len(full_text.trim()) < MIN_MEANINGFUL_TEXT_CHARS
}
