use super::*;

impl Chunker {
    /// Chunks section-annotated text by packing whole sections up to the size
    /// target, seeding each new chunk with the trailing overlap of the one it
    /// follows. Chunks still over the target afterwards are re-split by
    /// paragraph. Never returns an empty sequence: degenerate results fall
    /// back to one chunk holding the entire input.
    pub fn chunk_sectioned_text(&self, text: &str) -> Vec<Chunk> {
        let (pre_text, pairs) = split_sectioned_text(text, &self.section_marker);

        if pairs.is_empty() {
            return vec![Chunk {
                title: "Full Document".to_string(),
                content: text.to_string(),
            }];
        }

        let mut chunks = Vec::<Chunk>::new();
        let mut current = Chunk {
            title: "Document Start".to_string(),
            content: String::new(),
        };

        if !pre_text.trim().is_empty() && !pre_text.trim().starts_with("---") {
            current.content = pre_text;
        }

        for (title, body) in &pairs {
            if body.trim().is_empty() {
                continue;
            }

            let formatted = format!("\n\n## {}\n\n{}\n\n", title, body.trim());

            if char_len(&current.content) + char_len(&formatted) > self.config.max_chunk_size
                && !current.content.is_empty()
            {
                let overlap_content = tail_chars(&current.content, self.config.overlap).to_string();
                chunks.push(current);
                current = Chunk {
                    title: title.clone(),
                    content: format!("{}{}", overlap_content, formatted),
                };
            } else {
                current.content.push_str(&formatted);
            }
        }

        if !current.content.is_empty() {
            chunks.push(current);
        }

        if chunks.is_empty()
            || chunks
                .iter()
                .all(|chunk| char_len(&chunk.content) < MIN_USABLE_CHUNK_CHARS)
        {
            warn!("section chunking fell below the usability floor, returning whole document");
            return vec![Chunk {
                title: "Full Document".to_string(),
                content: text.to_string(),
            }];
        }

        let final_chunks = self.resplit_oversized_chunks(chunks);
        if final_chunks.is_empty() {
            return vec![Chunk {
                title: "Document Content".to_string(),
                content: text.to_string(),
            }];
        }

        final_chunks
    }
}
