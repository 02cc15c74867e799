use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "docprep",
    version,
    about = "Prepare extracted document text for LLM prompts: section detection and chunking"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect sections in a document and write the section-annotated text
    Sections(SectionsArgs),
    /// Run the full pipeline and write size-bounded chunks
    Chunk(ChunkArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SectionsArgs {
    /// Input document (.pdf via pdftotext, .txt read as a single page)
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the section-annotated text (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Where to write the JSON extraction report
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long)]
    pub max_pages: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ChunkArgs {
    /// Input document (.pdf via pdftotext, .txt read as a single page)
    #[arg(long)]
    pub input: PathBuf,

    /// Where to write the JSON chunk manifest (defaults to stdout)
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    #[arg(long, default_value_t = 5000)]
    pub max_chunk_size: usize,

    #[arg(long, default_value_t = 200)]
    pub overlap: usize,

    #[arg(long)]
    pub max_pages: Option<usize>,
}
