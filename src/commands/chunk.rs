use anyhow::{Context, Result};
use tracing::info;

use crate::chunking::{Chunker, ChunkingConfig};
use crate::cli::ChunkArgs;
use crate::commands::sections::display_file_name;
use crate::extract::{DocumentKind, extract_pages};
use crate::model::{ChunkRecord, ChunkRunManifest};
use crate::sectioning::{HeadingMatchers, detect_document_sections, render_sectioned_text};
use crate::util::{char_len, now_utc_string, sha256_file, write_json_pretty};

pub fn run(args: ChunkArgs) -> Result<()> {
    info!(
        input = %args.input.display(),
        max_chunk_size = args.max_chunk_size,
        overlap = args.overlap,
        "chunk requested"
    );

    // Configuration is validated before any extraction work starts.
    let chunker = Chunker::new(ChunkingConfig {
        max_chunk_size: args.max_chunk_size,
        overlap: args.overlap,
    })?;

    let extraction = extract_pages(&args.input, args.max_pages)?;

    let chunks = match extraction.kind {
        DocumentKind::Pdf => {
            let matchers = HeadingMatchers::new()?;
            let sections = detect_document_sections(&extraction.pages, &matchers);
            let sectioned_text = render_sectioned_text(&sections);
            chunker.chunk_sectioned_text(&sectioned_text)
        }
        DocumentKind::PlainText => {
            let text = extraction.pages.first().cloned().unwrap_or_default();
            chunker.chunk_plain_text(&text)
        }
    };

    let manifest = ChunkRunManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        filename: display_file_name(&args.input),
        source_sha256: sha256_file(&args.input)?,
        page_count: extraction.page_count(),
        chunk_count: chunks.len(),
        max_chunk_size: args.max_chunk_size,
        overlap: args.overlap,
        chunks: chunks
            .iter()
            .map(|chunk| ChunkRecord {
                title: chunk.title.clone(),
                char_count: char_len(&chunk.content),
                content: chunk.content.clone(),
            })
            .collect(),
    };

    match &args.manifest_path {
        Some(path) => {
            write_json_pretty(path, &manifest)?;
            info!(path = %path.display(), "wrote chunk manifest");
        }
        None => {
            let rendered = serde_json::to_string_pretty(&manifest)
                .context("failed to serialize chunk manifest")?;
            println!("{}", rendered);
        }
    }

    info!(
        page_count = extraction.page_count(),
        chunk_count = chunks.len(),
        "chunk completed"
    );

    Ok(())
}
