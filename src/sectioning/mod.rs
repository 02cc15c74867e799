use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::util::char_len;

mod detect;
mod normalize;
mod serialize;
#[cfg(test)]
mod tests;

pub use detect::*;
pub use normalize::*;
pub use serialize::*;

/// Normalizes extracted page text and segments it into titled sections.
///
/// Near-empty extractions (scanned documents with no text layer) skip
/// detection entirely and collapse into a single "Full Document" section.
pub fn detect_document_sections(pages: &[String], matchers: &HeadingMatchers) -> SectionMap {
    let full_text = normalize_pages(pages);

    if is_degenerate_extraction(&full_text, pages.len()) {
        warn!(
            chars = char_len(full_text.trim()),
            "extracted text too sparse for section detection, using single section"
        );
        return SectionMap::single("Full Document", &full_text);
    }

    detect_sections(&full_text, matchers)
}
