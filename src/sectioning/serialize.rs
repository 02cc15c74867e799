use super::*;

/// The section wire format consumed by the chunker. Splitting on
/// [`section_marker_regex`] must reconstruct the title/body pairs losslessly
/// (modulo whitespace trimming).
pub fn render_sectioned_text(sections: &SectionMap) -> String {
    let mut text = String::new();

    for section in sections.iter() {
        text.push_str(&format!("\n\n--- SECTION: {} ---\n\n", section.title));
        text.push_str(section.body.trim());
        text.push_str("\n\n");
    }

    text
}

pub fn section_marker_regex() -> Result<Regex> {
    Regex::new(r"\n\n---\s*SECTION:\s*([^-]+)\s*---\n\n")
        .context("failed to compile section marker regex")
}

/// Splits section-annotated text into the text before the first marker and
/// the ordered (title, body) pairs. Titles are trimmed; bodies are returned
/// as-is.
pub fn split_sectioned_text(text: &str, marker: &Regex) -> (String, Vec<(String, String)>) {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut pre_text = String::new();
    let mut cursor = 0usize;
    let mut pending_title: Option<String> = None;

    for captures in marker.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        let segment = &text[cursor..whole.start()];
        match pending_title.take() {
            Some(title) => pairs.push((title, segment.to_string())),
            None => pre_text.push_str(segment),
        }

        pending_title = captures
            .get(1)
            .map(|title| title.as_str().trim().to_string());
        cursor = whole.end();
    }

    let tail = &text[cursor..];
    match pending_title {
        Some(title) => pairs.push((title, tail.to_string())),
        None => pre_text.push_str(tail),
    }

    (pre_text, pairs)
}
