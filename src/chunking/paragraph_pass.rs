use super::*;

impl Chunker {
    /// Chunks plain text with no section markers by paragraph packing alone.
    pub fn chunk_plain_text(&self, text: &str) -> Vec<Chunk> {
        self.pack_paragraphs(text, "Text Document")
    }

    pub(super) fn resplit_oversized_chunks(&self, chunks: Vec<Chunk>) -> Vec<Chunk> {
        let mut final_chunks = Vec::<Chunk>::new();

        for chunk in chunks {
            if char_len(&chunk.content) > self.config.max_chunk_size {
                final_chunks.extend(self.pack_paragraphs(&chunk.content, &chunk.title));
            } else {
                final_chunks.push(chunk);
            }
        }

        final_chunks
    }

    /// Greedily packs blank-line-delimited paragraphs up to the size target,
    /// carrying the tail overlap between chunks. The first chunk keeps
    /// `title`; later ones append "(continued)". A single paragraph larger
    /// than the target is emitted whole, never split mid-paragraph.
    fn pack_paragraphs(&self, text: &str, title: &str) -> Vec<Chunk> {
        let continued_title = format!("{} (continued)", title);

        let mut chunks = Vec::<Chunk>::new();
        let mut current = Chunk {
            title: title.to_string(),
            content: String::new(),
        };

        for paragraph in self.paragraph_split.split(text) {
            if char_len(&current.content) + char_len(paragraph) > self.config.max_chunk_size
                && !current.content.is_empty()
            {
                let overlap_content = tail_chars(&current.content, self.config.overlap).to_string();
                chunks.push(current);
                current = Chunk {
                    title: continued_title.clone(),
                    content: format!("{}{}\n\n", overlap_content, paragraph),
                };
            } else {
                current.content.push_str(paragraph);
                current.content.push_str("\n\n");
            }
        }

        if !current.content.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}
