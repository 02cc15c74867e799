use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::sectioning::{section_marker_regex, split_sectioned_text};
use crate::util::char_len;

mod paragraph_pass;
mod section_pass;

/// Chunking that leaves every chunk below this floor is worse than no
/// chunking at all and falls back to a single whole-document chunk.
pub const MIN_USABLE_CHUNK_CHARS: usize = 200;

/// A size-bounded, optionally overlapping span of text prepared for
/// inclusion in a downstream prompt. Order reflects document order.
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ChunkingConfig {
    /// Soft target during section packing, hard target (atomic paragraphs
    /// excepted) once the paragraph pass runs. Characters, not bytes.
    pub max_chunk_size: usize,
    /// Trailing characters of a chunk repeated at the start of the next one.
    pub overlap: usize,
}

impl ChunkingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            bail!("max_chunk_size must be positive");
        }
        if self.overlap >= self.max_chunk_size {
            bail!(
                "overlap ({}) must be smaller than max_chunk_size ({})",
                self.overlap,
                self.max_chunk_size
            );
        }

        Ok(())
    }
}

/// Splits documents into ordered, size-bounded chunks. Section-annotated
/// text is packed section by section; plain text is packed by paragraph.
/// The configuration is validated at construction, so the chunking passes
/// themselves never fail.
#[derive(Debug)]
pub struct Chunker {
    config: ChunkingConfig,
    section_marker: Regex,
    paragraph_split: Regex,
}

impl Chunker {
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            section_marker: section_marker_regex()?,
            paragraph_split: Regex::new(r"\n\s*\n")
                .context("failed to compile paragraph split regex")?,
        })
    }
}

/// Last `count` characters of `text`, sliced at character boundaries.
fn tail_chars(text: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    match text.char_indices().rev().nth(count - 1) {
        Some((index, _)) => &text[index..],
        None => text,
    }
}
