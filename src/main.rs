use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use playscript::script_parser::{self, DialectKind, ParseOptions, DEFAULT_AUTHOR, DEFAULT_TITLE};
use playscript::{output, reader};
use std::io::{BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum DialectArg {
    /// Detect from the header style found in the file
    Auto,
    /// "ACT I" / "SCENE II" headers with "NAME." speaker labels
    Classic,
    /// "Act 1 Scene 2" headers with all-caps speaker lines
    Inline,
}

impl DialectArg {
    fn kind(self) -> Option<DialectKind> {
        match self {
            DialectArg::Auto => None,
            DialectArg::Classic => Some(DialectKind::Classic),
            DialectArg::Inline => Some(DialectKind::Inline),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "playscript")]
#[command(about = "Convert a play transcript into structured Act/Scene/line JSON")]
#[command(version)]
struct Args {
    /// Plain-text play transcript
    input: PathBuf,

    /// Output JSON path (defaults to the input path with a .json extension)
    output: Option<PathBuf>,

    /// Play title (defaults to the title detected in the file)
    title: Option<String>,

    /// Header convention used by the transcript
    #[arg(long, value_enum, default_value_t = DialectArg::Auto)]
    dialect: DialectArg,

    /// Author written into the document
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    author: String,

    /// Never ask for a title on the terminal
    #[arg(long)]
    no_prompt: bool,
}

fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

fn prompt_for_title() -> Result<Option<String>> {
    print!("Enter the play title (or press Enter for '{DEFAULT_TITLE}'): ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the conversion summary
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let output_path = args.output.clone().unwrap_or_else(|| default_output_path(&args.input));

    println!("Reading {}...", args.input.display());
    let file_reader = reader::ScriptReader::new(reader::ReaderConfig::default());
    let (lines, stats) = file_reader
        .read_script_lines(&args.input)
        .await
        .with_context(|| format!("Failed to read play transcript {}", args.input.display()))?;
    info!("Read {} lines ({} bytes) in {}ms", stats.lines_read, stats.bytes_read, stats.duration_ms);

    let kind = match args.dialect.kind() {
        Some(kind) => kind,
        None => DialectKind::detect(&lines)?,
    };
    let mut dialect = kind.build()?;

    let mut title = args.title.clone();
    if title.is_none()
        && kind == DialectKind::Inline
        && !args.no_prompt
        && dialect.sniff_title(&lines).is_none()
        && std::io::stdin().is_terminal()
    {
        title = prompt_for_title()?;
    }

    let options = ParseOptions {
        title,
        author: args.author.clone(),
    };
    let (document, report) = script_parser::parse_lines(&lines, dialect.as_mut(), &options);

    println!("Writing JSON to {}...", output_path.display());
    output::write_document_json(&output_path, &document)
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!();
    println!("Conversion complete!");
    println!("Play: {}", document.title);
    println!("Dialect: {}", report.dialect);
    println!("Total Acts: {}", document.act_count());
    println!("Total Scenes: {}", document.scene_count());
    println!("Total Lines/Entries: {}", document.entry_count());
    println!("Discarded lines: {}", report.discarded_lines);
    println!("Output saved to: {}", output_path.display());

    Ok(())
}
