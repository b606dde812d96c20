// WHY: Print the stretch of a transcript that starts at an "Act N Scene M" reference or at
// a quoted fragment, so a passage can be pulled out for editing

use anyhow::{Context, Result};
use clap::Parser;
use playscript::passage::{self, DEFAULT_SEGMENT_LINES};
use playscript::reader;
use std::path::PathBuf;
use tracing::info;

const PREVIEW_LINES: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "locate_passage")]
#[command(about = "Find a passage in a play transcript by Act/Scene reference or quoted text")]
struct Args {
    /// Plain-text play transcript
    file: PathBuf,

    /// "Act 1 Scene 1", "Act 2", or a fragment of text such as "And too soon marr'd"
    reference: String,

    /// Number of lines to extract from the located start
    #[arg(long, default_value_t = DEFAULT_SEGMENT_LINES)]
    lines: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    println!("Reading {}...", args.file.display());
    let lines = reader::read_script_lines(&args.file)
        .await
        .with_context(|| format!("Failed to read play transcript {}", args.file.display()))?;
    println!("Total lines in file: {}", lines.len());

    let (start, location) = match passage::parse_reference(&args.reference)? {
        Some(reference) => {
            let start = passage::find_act_scene_line(&lines, reference)?;
            println!("\nFound {} at line {}", reference, start + 1);
            (start, reference.to_string())
        }
        None => {
            let found = passage::find_text_context(&lines, &args.reference)?;
            println!("\nFound text at line {}", found.line_index + 1);
            println!("Location: {found}");
            (found.line_index, found.to_string())
        }
    };

    let segment = passage::extract_segment(&lines, start, args.lines);
    println!("\nExtracting {} lines starting from line {}", segment.len(), start + 1);
    println!("{}", "=".repeat(60));

    println!("\n[Preview - First {PREVIEW_LINES} lines from {location}]\n");
    for line in segment.iter().take(PREVIEW_LINES) {
        println!("{}", line.trim_end());
    }
    if segment.len() > PREVIEW_LINES {
        println!("\n... and {} more lines ...", segment.len() - PREVIEW_LINES);
    }

    println!("\n{}", "=".repeat(60));
    let word_count: usize = segment.iter().map(|line| line.split_whitespace().count()).sum();
    println!("Total words: {word_count}");

    Ok(())
}
