use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub title: String,
    pub content: String,
    pub char_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChunkRunManifest {
    pub manifest_version: u32,
    pub generated_at: String,
    pub filename: String,
    pub source_sha256: String,
    pub page_count: usize,
    pub chunk_count: usize,
    pub max_chunk_size: usize,
    pub overlap: usize,
    pub chunks: Vec<ChunkRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRecord {
    pub title: String,
    pub char_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub filename: String,
    pub source_sha256: String,
    pub page_count: usize,
    pub section_count: usize,
    pub char_count: usize,
    pub word_count: usize,
    pub sections: Vec<SectionRecord>,
    pub text_sample: String,
}
