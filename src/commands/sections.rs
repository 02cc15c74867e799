use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::SectionsArgs;
use crate::extract::extract_pages;
use crate::model::{SectionRecord, SectionReport};
use crate::sectioning::{HeadingMatchers, detect_document_sections, render_sectioned_text};
use crate::util::{char_len, ensure_directory, now_utc_string, sha256_file, write_json_pretty};

const TEXT_SAMPLE_CHARS: usize = 1000;

pub fn run(args: SectionsArgs) -> Result<()> {
    info!(input = %args.input.display(), "sections requested");

    let extraction = extract_pages(&args.input, args.max_pages)?;
    let matchers = HeadingMatchers::new()?;
    let sections = detect_document_sections(&extraction.pages, &matchers);
    let sectioned_text = render_sectioned_text(&sections);

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                ensure_directory(parent)?;
            }
            fs::write(path, &sectioned_text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote section-annotated text");
        }
        None => print!("{}", sectioned_text),
    }

    if let Some(report_path) = &args.report_path {
        let report = SectionReport {
            manifest_version: 1,
            generated_at: now_utc_string(),
            filename: display_file_name(&args.input),
            source_sha256: sha256_file(&args.input)?,
            page_count: extraction.page_count(),
            section_count: sections.len(),
            char_count: char_len(&sectioned_text),
            word_count: sectioned_text.split_whitespace().count(),
            sections: sections
                .iter()
                .map(|section| SectionRecord {
                    title: section.title.clone(),
                    char_count: char_len(&section.body),
                })
                .collect(),
            text_sample: sample_text(&sectioned_text, TEXT_SAMPLE_CHARS),
        };
        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote section report");
    }

    info!(
        page_count = extraction.page_count(),
        section_count = sections.len(),
        "sections completed"
    );

    Ok(())
}

pub(crate) fn display_file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|value| value.to_str())
        .unwrap_or_default()
        .to_string()
}

fn sample_text(text: &str, max_chars: usize) -> String {
    if char_len(text) <= max_chars {
        return text.to_string();
    }

    let sample: String = text.chars().take(max_chars).collect();
    format!("{}...(truncated)", sample)
}
