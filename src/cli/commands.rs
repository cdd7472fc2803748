use std::fs::{self, File};
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::dedup::deduplicate;
use crate::models::Library;
use crate::parsers::parse_clippings;
use crate::render::{RenderOptions, render_markdown};
use crate::utils::{default_output_path, validate_file_size};

#[derive(Parser)]
#[command(name = "kindle-notes")]
#[command(version = "0.1.0")]
#[command(about = "Convert Kindle clippings into markdown formatted notes", long_about = None)]
pub struct Cli {
    /// Kindle clippings file to use
    pub file: PathBuf,

    /// Markdown output file. Defaults to the name of the book
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Convert headings to use sentence case
    #[arg(short, long)]
    pub lower: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let raw = load_clippings(&cli.file)?;
    let library = parse_clippings(&raw)?;

    if library.skipped_records > 0 {
        eprintln!("Warning: skipped {} unparseable record(s)", library.skipped_records);
    }
    if library.is_empty() {
        bail!("No books found in {}", cli.file.display());
    }

    let stdin = io::stdin();
    let index = select_book(&library, &mut stdin.lock(), &mut io::stdout())?;
    let book = &library.books[index];

    let report = deduplicate(book.entries.clone());
    if report.duplicates > 0 {
        println!("Removed {} duplicate highlight(s)", report.duplicates);
    }

    let options = RenderOptions { lower_case_titles: cli.lower };
    let markdown = render_markdown(&report.entries, &book.title, &options);

    let output_path = cli.output.unwrap_or_else(|| default_output_path(&book.title));
    fs::write(&output_path, markdown)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
    println!("Wrote {}", output_path.display());

    Ok(())
}

fn load_clippings(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open clippings file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut raw = String::new();
    file.read_to_string(&mut raw)
        .with_context(|| format!("Failed to read clippings file: {}", path.display()))?;
    Ok(raw)
}

/// List the library's books and read the chosen index from `input`.
///
/// Generic over reader/writer so the prompt logic is testable without a
/// terminal; [`run`] passes stdin/stdout.
fn select_book(library: &Library, input: &mut impl BufRead, output: &mut impl Write) -> Result<usize> {
    for (index, summary) in library.summaries().iter().enumerate() {
        writeln!(output, "{}. {}", index, summary.title)?;
    }
    write!(output, "Select a book: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read book selection")?;

    let index: usize = line
        .trim()
        .parse()
        .with_context(|| format!("Book selection must be a number, got {:?}", line.trim()))?;
    if index >= library.books.len() {
        bail!("Book selection out of range: {} (valid: 0-{})", index, library.books.len() - 1);
    }

    Ok(index)
}
