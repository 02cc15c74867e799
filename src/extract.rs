use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Page-structured source; gets section detection before chunking.
    Pdf,
    /// Flat text, treated as a single page and chunked by paragraph only.
    PlainText,
}

/// Ordered per-page text produced by an extraction backend. Pages may be
/// empty when the source had no extractable text; the normalizer substitutes
/// placeholders for those.
#[derive(Debug)]
pub struct ExtractedPages {
    pub kind: DocumentKind,
    pub pages: Vec<String>,
}

impl ExtractedPages {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

pub fn extract_pages(input: &Path, max_pages: Option<usize>) -> Result<ExtractedPages> {
    let extension = input
        .extension()
        .and_then(|value| value.to_str())
        .map(|value| value.to_ascii_lowercase())
        .unwrap_or_default();

    let extraction = match extension.as_str() {
        "pdf" => extract_pages_with_pdftotext(input, max_pages)?,
        "txt" => extract_text_file(input)?,
        other => bail!(
            "unsupported file type '{}' for {}: only PDF and TXT files are supported",
            other,
            input.display()
        ),
    };

    info!(
        input = %input.display(),
        page_count = extraction.page_count(),
        "extracted page text"
    );

    Ok(extraction)
}

fn extract_text_file(path: &Path) -> Result<ExtractedPages> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = String::from_utf8_lossy(&raw).replace('\u{0000}', "");

    Ok(ExtractedPages {
        kind: DocumentKind::PlainText,
        pages: vec![text],
    })
}

fn extract_pages_with_pdftotext(pdf_path: &Path, max_pages: Option<usize>) -> Result<ExtractedPages> {
    if !command_available("pdftotext") {
        bail!(
            "pdftotext is required to extract {} but is not available",
            pdf_path.display()
        );
    }

    let mut command = Command::new("pdftotext");
    command.arg("-enc").arg("UTF-8").arg("-f").arg("1");
    if let Some(max_pages) = max_pages {
        command.arg("-l").arg(max_pages.to_string());
    }
    command.arg(pdf_path).arg("-");

    let output = command
        .output()
        .with_context(|| format!("failed to execute pdftotext for {}", pdf_path.display()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "pdftotext returned non-zero exit status for {}: {}",
            pdf_path.display(),
            stderr.trim()
        );
    }

    let raw = String::from_utf8_lossy(&output.stdout);
    let mut pages: Vec<String> = raw
        .split('\u{000C}')
        .map(|page| page.replace('\u{0000}', ""))
        .collect();

    while let Some(last_page) = pages.last() {
        if last_page.trim().is_empty() {
            pages.pop();
            continue;
        }
        break;
    }

    Ok(ExtractedPages {
        kind: DocumentKind::Pdf,
        pages,
    })
}

fn command_available(program: &str) -> bool {
    Command::new(program).arg("-v").output().is_ok()
}
